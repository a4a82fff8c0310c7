#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("district '{name}' not found in metrics table")]
    DistrictNotFound { name: String },
}
