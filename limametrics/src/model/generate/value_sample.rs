/// one raw draw from the value generator: the two time-period values for a
/// single district, before metric derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSample {
    pub district: String,
    pub baseline: i64,
    pub follow_up: i64,
}
