use std::net::SocketAddr;

use todo_service::{Settings, StartupError};

use thiserror::Error;
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

#[derive(Debug, Error)]
enum TodoServiceError {
    #[error("Startup error")]
    Startup(#[from] StartupError),

    #[error("Io error")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), TodoServiceError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .max_blocking_threads(num_cpus::get() * 2)
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                error!(error = %e, "failed to bind to SIGTERM, waiting for SIGINT only");
                let _ = signal::ctrl_c().await;
                return;
            }
        };

        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("SIGINT received.");
            },
            _ = sigterm.recv() => {
                info!("SIGTERM received.");
            },
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("Ctrl-C received.");
    }
}

async fn async_main() -> Result<(), TodoServiceError> {
    let settings = Settings::new()?;

    let _telemetry_guard = todo_service::init_telemetry(&settings)?;

    let server_addr = settings.server_addr();
    let (app, service) = todo_service::init_app(&settings)?;

    let listener = TcpListener::bind(&server_addr).await?;
    info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    if let Err(e) = service.flush_storage().await {
        error!(error = %e, "failed to flush storage on shutdown");
    }

    Ok(())
}
