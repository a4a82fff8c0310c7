pub mod district;
pub mod domain;
pub mod generate;
pub mod metrics;
