use super::OutputFormat;
use crate::model::{domain::MetricDomain, metrics::SortColumn};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "limametrics",
    version,
    about = "builds a synthetic two-year district metrics table for Lima Metropolitana"
)]
pub struct CliArgs {
    /// metric domain to generate
    #[arg(value_enum)]
    pub domain: MetricDomain,
    /// RNG seed for a reproducible table; draws from OS entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// column to order the output table by
    #[arg(long, value_enum, default_value_t = SortColumn::AbsoluteChange)]
    pub sort_by: SortColumn,
    /// sort descending instead of ascending
    #[arg(long)]
    pub descending: bool,
    /// output serialization format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
    /// output file; writes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// calendar year of the follow-up values
    #[arg(long, default_value_t = 2025)]
    pub follow_up_year: i32,
}
