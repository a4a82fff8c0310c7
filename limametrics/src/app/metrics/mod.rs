mod cli_args;
pub mod metrics_app;
mod metrics_app_error;
mod output_format;

pub use cli_args::CliArgs;
pub use metrics_app_error::MetricsAppError;
pub use output_format::OutputFormat;
