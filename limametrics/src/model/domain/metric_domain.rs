use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the metric being modeled. each domain carries its own generation
/// ranges, follow-up rule, and rounding precision for relative change.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum MetricDomain {
    /// estimated population per district, in thousands of inhabitants
    Population,
    /// percentage of the district population with technology access
    TechAccess,
}

impl MetricDomain {
    /// tech-access values are percentages and may never exceed this cap.
    pub const TECH_ACCESS_CAP: i64 = 98;

    /// draws a baseline (year N) value.
    ///
    /// * population: uniform integer in [50, 1200]
    /// * tech-access: uniform integer in [10, 85]
    pub fn draw_baseline<R: Rng>(&self, rng: &mut R) -> i64 {
        match self {
            MetricDomain::Population => rng.random_range(50..=1200),
            MetricDomain::TechAccess => rng.random_range(10..=85),
        }
    }

    /// draws a follow-up (year N+1) value as a function of the baseline.
    ///
    /// * population: floor(baseline * r), r uniform in [1.01, 1.05]
    /// * tech-access: min(baseline + d, 98), d uniform integer in [5, 15]
    pub fn draw_follow_up<R: Rng>(&self, baseline: i64, rng: &mut R) -> i64 {
        match self {
            MetricDomain::Population => {
                let growth: f64 = rng.random_range(1.01..=1.05);
                (baseline as f64 * growth).floor() as i64
            }
            MetricDomain::TechAccess => {
                let delta: i64 = rng.random_range(5..=15);
                (baseline + delta).min(Self::TECH_ACCESS_CAP)
            }
        }
    }

    /// decimal places applied when rounding relative change.
    pub fn relative_change_precision(&self) -> u32 {
        match self {
            MetricDomain::Population => 2,
            MetricDomain::TechAccess => 1,
        }
    }

    /// unit suffix for display and logging.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricDomain::Population => "thousand",
            MetricDomain::TechAccess => "%",
        }
    }
}

impl Display for MetricDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MetricDomain::Population => "population",
            MetricDomain::TechAccess => "tech_access",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod test {
    use super::MetricDomain;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_population_draws_in_range() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let baseline = MetricDomain::Population.draw_baseline(&mut rng);
            assert!((50..=1200).contains(&baseline));

            let follow_up = MetricDomain::Population.draw_follow_up(baseline, &mut rng);
            // floor(baseline * 1.01) .. floor(baseline * 1.05)
            assert!(follow_up >= (baseline as f64 * 1.01).floor() as i64);
            assert!(follow_up <= (baseline as f64 * 1.05).floor() as i64);
        }
    }

    #[test]
    fn test_tech_access_draws_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let baseline = MetricDomain::TechAccess.draw_baseline(&mut rng);
            assert!((10..=85).contains(&baseline));

            let follow_up = MetricDomain::TechAccess.draw_follow_up(baseline, &mut rng);
            assert!(follow_up >= baseline);
            assert!(follow_up <= MetricDomain::TECH_ACCESS_CAP);
            assert!((0..=100).contains(&follow_up));
        }
    }

    #[test]
    fn test_tech_access_cap_applies() {
        let mut rng = StdRng::seed_from_u64(2);
        let follow_up = MetricDomain::TechAccess.draw_follow_up(95, &mut rng);
        assert_eq!(follow_up, MetricDomain::TECH_ACCESS_CAP);
    }

    #[test]
    fn test_precision_per_domain() {
        assert_eq!(MetricDomain::Population.relative_change_precision(), 2);
        assert_eq!(MetricDomain::TechAccess.relative_change_precision(), 1);
    }
}
