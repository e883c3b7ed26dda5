mod observability;
mod storage;

use crate::storage::SledStartupError;
use thiserror::Error;

pub use observability::{init_telemetry, TelemetryGuard};
pub use storage::init_storage;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),

    #[error("Failed to open sled storage")]
    OpenSledStorage(#[from] SledStartupError),

    #[error("Missing storage config: {0}")]
    MissingStorageConfig(String),

    #[error("Failed to load configs")]
    LoadConfig(#[from] config::ConfigError),

    #[error("Failed to init tracing")]
    InitTracing(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("Failed to set global tracing provider")]
    SetGlobalTracingProvider(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Failed to bridge log records into tracing")]
    SetLogger(#[from] tracing_log::log::SetLoggerError),
}
