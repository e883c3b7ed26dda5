pub(crate) mod types;

use std::net::SocketAddr;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
pub(crate) use types::{ServerConfig, StorageSettings, TelemetryConfig};

use crate::{
    init::StartupError,
    trace_err,
    utils::{DATABASE_PATH_KEY, PORT_KEY},
};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub(crate) storage: StorageSettings,
    pub(crate) telemetry: TelemetryConfig,
    pub(crate) server: ServerConfig,
}

impl Settings {
    pub fn new() -> Result<Self, StartupError> {
        dotenv::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or("development".into());

        Settings::from_file(&run_mode)
    }

    /// Layers `config/default`, `config/{file_name}`, `APP__*` variables and
    /// finally the bare `PORT` / `DATABASE_PATH` variables.
    pub fn from_file(file_name: &str) -> Result<Self, StartupError> {
        let port = std::env::var(PORT_KEY)
            .ok()
            .map(|value| {
                value
                    .parse::<u16>()
                    .map(i64::from)
                    .map_err(|_| StartupError::InvalidEnvVar(PORT_KEY, value))
            })
            .transpose()?;
        let database_path = std::env::var(DATABASE_PATH_KEY).ok();

        trace_err!(
            Config::builder()
                .add_source(File::with_name("config/default"))
                .add_source(File::with_name(&format!("config/{file_name}")).required(false))
                .add_source(Environment::with_prefix("APP").separator("__"))
                .set_override_option("server.port", port)?
                .set_override_option("storage.sled.path", database_path)?
                .build()?
                .try_deserialize(),
            "failed to build app settings"
        )
        .map_err(Into::into)
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    pub fn storage_timeout(&self) -> Duration {
        Duration::from_millis(self.storage.timeout_ms)
    }

    pub fn tracing_enabled(&self) -> bool {
        self.telemetry.tracing
    }

    pub fn metrics_enabled(&self) -> bool {
        self.telemetry.metrics
    }
}
