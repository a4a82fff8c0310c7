use super::MetricRecord;
use crate::model::{
    district::DistrictRegistry, domain::MetricDomain, generate::ValueGenerator,
    generate::ValueSample,
};
use itertools::Itertools;

/// full pipeline entry point: draws one sample per registered district and
/// derives the change columns, preserving registry ordering.
///
/// # Arguments
///
/// * `domain` - metric domain governing generation ranges and rounding
/// * `registry` - static district list; one record is produced per district
/// * `seed` - optional seed for reproducible tables
pub fn generate(
    domain: &MetricDomain,
    registry: &DistrictRegistry,
    seed: Option<u64>,
) -> Vec<MetricRecord> {
    let mut generator = ValueGenerator::from_seed(seed);
    let samples = generator.draw(domain, registry.districts());
    derive(domain, &samples)
}

/// derives the change columns for a set of samples, preserving input
/// ordering.
pub fn derive(domain: &MetricDomain, samples: &[ValueSample]) -> Vec<MetricRecord> {
    samples
        .iter()
        .map(|s| derive_record(domain, &s.district, s.baseline, s.follow_up))
        .collect_vec()
}

/// computes the change columns for a single (district, baseline, follow-up)
/// triple.
///
/// relative change is guarded independently of the generator ranges: a zero
/// baseline yields 0 rather than a division fault, even though the
/// generators never produce one.
pub fn derive_record(
    domain: &MetricDomain,
    district: &str,
    baseline: i64,
    follow_up: i64,
) -> MetricRecord {
    let absolute_change = follow_up - baseline;
    let relative_change = if baseline == 0 {
        0.0
    } else {
        round_to_places(
            absolute_change as f64 / baseline as f64 * 100.0,
            domain.relative_change_precision(),
        )
    };
    MetricRecord {
        district: district.to_string(),
        baseline,
        follow_up,
        absolute_change,
        relative_change,
    }
}

/// half-up rounding to a fixed number of decimal places.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}
