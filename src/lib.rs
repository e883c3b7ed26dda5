mod app;
mod config;
mod docs;
pub(crate) mod handlers;
mod init;
pub(crate) mod middleware;
pub(crate) mod service;
pub(crate) mod storage;
pub(crate) mod utils;

pub use config::Settings;
pub use handlers::error::AppError;
pub use init::{init_telemetry, StartupError, TelemetryGuard};
pub use service::Service;

use axum::Router;

#[cfg(feature = "integration_tests")]
pub use app::build_app;

#[cfg(feature = "integration_tests")]
pub use init::init_storage;

#[cfg(feature = "integration_tests")]
pub use storage::{Todo, TodoId};

#[cfg(feature = "integration_tests")]
pub use storage::test_util::TestStorageBuilder;

#[cfg(feature = "integration_tests")]
pub use handlers::types::{TodoResponse, TodosResponse};

use tracing::{info, instrument};

/// Opens storage and builds the router. The returned `Service` is kept by the
/// caller so storage can be flushed after the server stops.
#[instrument(name = "init_app", skip_all)]
pub fn init_app(settings: &Settings) -> Result<(Router, Service), StartupError> {
    info!(settings = ?settings, "init_app with settings");

    let service = init::init_storage(settings)?;

    Ok((app::build_app(service.clone()), service))
}
