use super::ValueSample;
use crate::model::{district::District, domain::MetricDomain};
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};

/// draws baseline and follow-up values for a list of districts. the random
/// source is owned explicitly rather than taken from ambient global state,
/// so a seeded generator reproduces its draws exactly.
pub struct ValueGenerator {
    rng: StdRng,
}

impl ValueGenerator {
    pub fn new(rng: StdRng) -> ValueGenerator {
        ValueGenerator { rng }
    }

    /// seeded generators are deterministic; unseeded generators draw their
    /// state from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> ValueGenerator {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        ValueGenerator { rng }
    }

    /// draws one sample per district, preserving district ordering. all
    /// values are in-range by construction (see [`MetricDomain`]), so this
    /// cannot fail.
    pub fn draw(&mut self, domain: &MetricDomain, districts: &[District]) -> Vec<ValueSample> {
        districts
            .iter()
            .map(|district| {
                let baseline = domain.draw_baseline(&mut self.rng);
                let follow_up = domain.draw_follow_up(baseline, &mut self.rng);
                ValueSample {
                    district: district.name.clone(),
                    baseline,
                    follow_up,
                }
            })
            .collect_vec()
    }
}
