use super::SummaryStats;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// one point of the multi-year mean-value evolution series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub mean_value: f64,
}

/// synthesizes the four-year mean-value evolution series ending at the
/// follow-up year. the last two points are the table's actual baseline and
/// follow-up means; the two years before the baseline are backcast from the
/// baseline mean with uniform offsets of [10, 15] and [5, 8].
///
/// the random source is the caller's, as with value generation.
pub fn trend_series<R: Rng>(
    stats: &SummaryStats,
    follow_up_year: i32,
    rng: &mut R,
) -> Vec<TrendPoint> {
    let far_offset: f64 = rng.random_range(10.0..=15.0);
    let near_offset: f64 = rng.random_range(5.0..=8.0);
    vec![
        TrendPoint {
            year: follow_up_year - 3,
            mean_value: stats.mean_baseline - far_offset,
        },
        TrendPoint {
            year: follow_up_year - 2,
            mean_value: stats.mean_baseline - near_offset,
        },
        TrendPoint {
            year: follow_up_year - 1,
            mean_value: stats.mean_baseline,
        },
        TrendPoint {
            year: follow_up_year,
            mean_value: stats.mean_follow_up,
        },
    ]
}
