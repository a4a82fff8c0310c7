use super::{metrics_ops, MetricRecord, MetricsError, SortColumn, SummaryStats};
use crate::model::{district::DistrictRegistry, domain::MetricDomain};

/// the derived table for one rendering session: one record per district, in
/// registry ordering. the table is immutable once built; sorting returns a
/// new ordering and regeneration produces a fresh table.
pub struct MetricsTable {
    domain: MetricDomain,
    records: Vec<MetricRecord>,
}

impl MetricsTable {
    /// builds a table for the session by running the full pipeline:
    /// generate one sample per registered district, then derive the change
    /// columns.
    pub fn build(
        domain: &MetricDomain,
        registry: &DistrictRegistry,
        seed: Option<u64>,
    ) -> MetricsTable {
        let records = metrics_ops::generate(domain, registry, seed);
        MetricsTable {
            domain: *domain,
            records,
        }
    }

    /// wraps already-derived records, preserving their ordering.
    pub fn from_records(domain: &MetricDomain, records: Vec<MetricRecord>) -> MetricsTable {
        MetricsTable {
            domain: *domain,
            records,
        }
    }

    pub fn domain(&self) -> &MetricDomain {
        &self.domain
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// returns a new ordering of the table sorted by the named column.
    /// the sort is stable, so rows with equal keys keep their original
    /// relative order. the underlying table is not mutated.
    pub fn sort_by(&self, column: &SortColumn, ascending: bool) -> Vec<MetricRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| {
            let ordering = match column {
                SortColumn::Baseline => a.baseline.cmp(&b.baseline),
                SortColumn::FollowUp => a.follow_up.cmp(&b.follow_up),
                SortColumn::AbsoluteChange => a.absolute_change.cmp(&b.absolute_change),
                SortColumn::RelativeChange => a.relative_change.total_cmp(&b.relative_change),
            };
            // ties stay Equal under reversal, preserving stability
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
        sorted
    }

    /// single-row lookup by district name.
    pub fn lookup(&self, district: &str) -> Result<&MetricRecord, MetricsError> {
        self.records
            .iter()
            .find(|r| r.district == district)
            .ok_or_else(|| MetricsError::DistrictNotFound {
                name: district.to_string(),
            })
    }

    /// arithmetic means of the baseline, follow-up, and relative-change
    /// columns. an empty table yields zeroed stats.
    pub fn aggregate(&self) -> SummaryStats {
        if self.records.is_empty() {
            return SummaryStats::default();
        }
        let n = self.records.len() as f64;
        let baseline_sum: i64 = self.records.iter().map(|r| r.baseline).sum();
        let follow_up_sum: i64 = self.records.iter().map(|r| r.follow_up).sum();
        let relative_sum: f64 = self.records.iter().map(|r| r.relative_change).sum();
        SummaryStats {
            mean_baseline: baseline_sum as f64 / n,
            mean_follow_up: follow_up_sum as f64 / n,
            mean_relative_change: relative_sum / n,
        }
    }

    /// the district's follow-up value as a percentage of the table maximum,
    /// clamped to [0, 100]. 0 when the table maximum is not positive. this
    /// feeds the per-district progress display.
    pub fn share_of_max(&self, district: &str) -> Result<f64, MetricsError> {
        let record = self.lookup(district)?;
        let max = self.records.iter().map(|r| r.follow_up).max().unwrap_or(0);
        if max <= 0 {
            return Ok(0.0);
        }
        let share = record.follow_up as f64 / max as f64 * 100.0;
        Ok(share.clamp(0.0, 100.0))
    }
}

#[cfg(test)]
mod test {
    use super::MetricsTable;
    use crate::model::{
        district::DistrictRegistry,
        domain::MetricDomain,
        metrics::{MetricRecord, MetricsError, SortColumn},
    };
    use itertools::Itertools;

    fn record(district: &str, baseline: i64, follow_up: i64, relative_change: f64) -> MetricRecord {
        MetricRecord {
            district: district.to_string(),
            baseline,
            follow_up,
            absolute_change: follow_up - baseline,
            relative_change,
        }
    }

    #[test]
    fn test_sort_by_orders_and_reverses() {
        let table = MetricsTable::from_records(
            &MetricDomain::Population,
            vec![
                record("Comas", 300, 306, 2.0),
                record("Ate", 100, 105, 5.0),
                record("Lince", 200, 202, 1.0),
            ],
        );

        let ascending = table.sort_by(&SortColumn::Baseline, true);
        let names = ascending.iter().map(|r| r.district.as_str()).collect_vec();
        assert_eq!(names, vec!["Ate", "Lince", "Comas"]);

        let descending = table.sort_by(&SortColumn::RelativeChange, false);
        let names = descending.iter().map(|r| r.district.as_str()).collect_vec();
        assert_eq!(names, vec!["Ate", "Comas", "Lince"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // three rows share baseline 100; they must keep insertion order
        // under both sort directions
        let table = MetricsTable::from_records(
            &MetricDomain::Population,
            vec![
                record("Breña", 100, 103, 3.0),
                record("Surquillo", 100, 101, 1.0),
                record("Barranco", 100, 102, 2.0),
                record("Lince", 50, 52, 4.0),
            ],
        );

        let ascending = table.sort_by(&SortColumn::Baseline, true);
        let names = ascending.iter().map(|r| r.district.as_str()).collect_vec();
        assert_eq!(names, vec!["Lince", "Breña", "Surquillo", "Barranco"]);

        let descending = table.sort_by(&SortColumn::Baseline, false);
        let names = descending.iter().map(|r| r.district.as_str()).collect_vec();
        assert_eq!(names, vec!["Breña", "Surquillo", "Barranco", "Lince"]);
    }

    #[test]
    fn test_sort_does_not_mutate_table() {
        let table = MetricsTable::from_records(
            &MetricDomain::Population,
            vec![record("Comas", 300, 306, 2.0), record("Ate", 100, 105, 5.0)],
        );
        let _ = table.sort_by(&SortColumn::Baseline, true);
        let names = table
            .records()
            .iter()
            .map(|r| r.district.as_str())
            .collect_vec();
        assert_eq!(names, vec!["Comas", "Ate"]);
    }

    #[test]
    fn test_lookup_round_trips_every_district() {
        let registry = DistrictRegistry::lima_metropolitana();
        let table = MetricsTable::build(&MetricDomain::TechAccess, &registry, Some(99));
        for district in registry.districts() {
            let found = table
                .lookup(&district.name)
                .expect("registered district should be present");
            assert_eq!(found.district, district.name);
        }
    }

    #[test]
    fn test_lookup_unknown_district_is_not_found() {
        let registry = DistrictRegistry::lima_metropolitana();
        let table = MetricsTable::build(&MetricDomain::Population, &registry, Some(99));
        let result = table.lookup("Nonexistent District");
        match result {
            Err(MetricsError::DistrictNotFound { name }) => {
                assert_eq!(name, "Nonexistent District")
            }
            Ok(_) => panic!("lookup of unregistered district should fail"),
        }
    }

    #[test]
    fn test_aggregate_means() {
        let table = MetricsTable::from_records(
            &MetricDomain::Population,
            vec![
                record("Ate", 100, 110, 10.0),
                record("Comas", 200, 220, 10.0),
                record("Lince", 300, 330, 10.0),
            ],
        );
        let stats = table.aggregate();
        assert_eq!(stats.mean_baseline, 200.0);
        assert_eq!(stats.mean_follow_up, 220.0);
        assert_eq!(stats.mean_relative_change, 10.0);
    }

    #[test]
    fn test_aggregate_empty_table_is_zeroed() {
        let table = MetricsTable::from_records(&MetricDomain::Population, vec![]);
        let stats = table.aggregate();
        assert_eq!(stats.mean_baseline, 0.0);
        assert_eq!(stats.mean_follow_up, 0.0);
        assert_eq!(stats.mean_relative_change, 0.0);
    }

    #[test]
    fn test_share_of_max() {
        let table = MetricsTable::from_records(
            &MetricDomain::Population,
            vec![record("Ate", 100, 200, 100.0), record("Comas", 100, 50, -50.0)],
        );
        let max_share = table.share_of_max("Ate").expect("lookup failed");
        assert_eq!(max_share, 100.0);
        let half_share = table.share_of_max("Comas").expect("lookup failed");
        assert_eq!(half_share, 25.0);
    }

    #[test]
    fn test_share_of_max_zero_maximum() {
        let table = MetricsTable::from_records(
            &MetricDomain::TechAccess,
            vec![record("Ate", 0, 0, 0.0)],
        );
        let share = table.share_of_max("Ate").expect("lookup failed");
        assert_eq!(share, 0.0);
    }
}
