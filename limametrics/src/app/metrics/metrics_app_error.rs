#[derive(thiserror::Error, Debug)]
pub enum MetricsAppError {
    #[error("failed writing '{filepath}': {error}")]
    WriteError { filepath: String, error: String },
    #[error("failure serializing table to JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("failure serializing table to CSV: {0}")]
    CsvError(#[from] csv::Error),
    #[error("i/o failure writing table: {0}")]
    IoError(#[from] std::io::Error),
}
