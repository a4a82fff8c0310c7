use super::{CliArgs, MetricsAppError, OutputFormat};
use crate::model::{
    district::DistrictRegistry,
    domain::MetricDomain,
    metrics::{access_trend, MetricRecord, MetricsTable},
};
use rand::{rngs::StdRng, SeedableRng};
use std::fs::File;
use std::io::Write;

/// builds the session table, logs the aggregate summary, and writes the
/// sorted table in the requested format.
pub fn run(args: &CliArgs) -> Result<(), MetricsAppError> {
    let registry = DistrictRegistry::lima_metropolitana();
    let table = MetricsTable::build(&args.domain, &registry, args.seed);
    let stats = table.aggregate();
    log::info!(
        "built {} table for {} districts (values in {})",
        table.domain(),
        table.len(),
        table.domain().unit()
    );
    log::info!("summary: {}", stats);

    if *table.domain() == MetricDomain::TechAccess {
        let mut rng = trend_rng(args.seed);
        for point in access_trend::trend_series(&stats, args.follow_up_year, &mut rng) {
            log::info!("mean access {}: {:.1}%", point.year, point.mean_value);
        }
    }

    let rows = table.sort_by(&args.sort_by, !args.descending);
    match &args.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| MetricsAppError::WriteError {
                filepath: path.to_string_lossy().to_string(),
                error: e.to_string(),
            })?;
            write_table(&rows, &args.format, &mut file)?;
            log::info!("wrote {} rows to {}", rows.len(), path.to_string_lossy());
        }
        None => {
            let mut stdout = std::io::stdout();
            write_table(&rows, &args.format, &mut stdout)?;
        }
    }
    Ok(())
}

/// the trend series consumes its own random source, offset from the table
/// seed so trend draws never perturb table reproducibility.
fn trend_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s.wrapping_add(1)),
        None => StdRng::from_os_rng(),
    }
}

pub fn write_table<W: Write>(
    records: &[MetricRecord],
    format: &OutputFormat,
    writer: &mut W,
) -> Result<(), MetricsAppError> {
    match format {
        OutputFormat::Csv => write_csv(records, writer),
        OutputFormat::Json => write_json(records, writer),
    }
}

fn write_csv<W: Write>(records: &[MetricRecord], writer: &mut W) -> Result<(), MetricsAppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(records: &[MetricRecord], writer: &mut W) -> Result<(), MetricsAppError> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::write_table;
    use crate::app::metrics::OutputFormat;
    use crate::model::metrics::MetricRecord;

    fn records() -> Vec<MetricRecord> {
        vec![
            MetricRecord {
                district: String::from("Ate"),
                baseline: 100,
                follow_up: 105,
                absolute_change: 5,
                relative_change: 5.0,
            },
            MetricRecord {
                district: String::from("San Juan de Lurigancho"),
                baseline: 900,
                follow_up: 927,
                absolute_change: 27,
                relative_change: 3.0,
            },
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut buffer: Vec<u8> = vec![];
        write_table(&records(), &OutputFormat::Csv, &mut buffer).expect("csv write failed");
        let text = String::from_utf8(buffer).expect("csv output should be utf-8");

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("district,baseline,follow_up,absolute_change,relative_change")
        );
        assert_eq!(lines.next(), Some("Ate,100,105,5,5.0"));
        assert_eq!(lines.next(), Some("San Juan de Lurigancho,900,927,27,3.0"));
    }

    #[test]
    fn test_write_json_round_trips() {
        let mut buffer: Vec<u8> = vec![];
        write_table(&records(), &OutputFormat::Json, &mut buffer).expect("json write failed");

        let parsed: Vec<MetricRecord> =
            serde_json::from_slice(&buffer).expect("json output should parse");
        assert_eq!(parsed, records());
    }
}
