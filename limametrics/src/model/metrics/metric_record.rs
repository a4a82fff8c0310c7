use serde::{Deserialize, Serialize};

/// one derived row of the metrics table: the two time-period values for a
/// district plus the change columns computed from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub district: String,
    /// year N value
    pub baseline: i64,
    /// year N+1 value
    pub follow_up: i64,
    /// follow_up - baseline, in the units of the underlying metric
    pub absolute_change: i64,
    /// percentage change of follow_up over baseline, rounded to the domain
    /// precision. 0 when baseline is 0.
    pub relative_change: f64,
}
