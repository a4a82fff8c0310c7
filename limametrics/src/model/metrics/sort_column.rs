use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the sortable columns of the metrics table. the district column is the
/// row identifier and is not sortable.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SortColumn {
    Baseline,
    FollowUp,
    AbsoluteChange,
    RelativeChange,
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortColumn::Baseline => super::BASELINE,
            SortColumn::FollowUp => super::FOLLOW_UP,
            SortColumn::AbsoluteChange => super::ABSOLUTE_CHANGE,
            SortColumn::RelativeChange => super::RELATIVE_CHANGE,
        };
        write!(f, "{}", s)
    }
}
