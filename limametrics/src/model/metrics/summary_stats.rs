use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// arithmetic means over the full metrics table, used for summary display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct SummaryStats {
    pub mean_baseline: f64,
    pub mean_follow_up: f64,
    pub mean_relative_change: f64,
}

impl Display for SummaryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mean baseline {:.2}, mean follow-up {:.2}, mean relative change {:.2}%",
            self.mean_baseline, self.mean_follow_up, self.mean_relative_change
        )
    }
}
