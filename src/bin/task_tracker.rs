//! Task tracker HTTP server.

use std::{error::Error, net::SocketAddr, time::Duration};

use camino::Utf8PathBuf;
use clap::Parser;
use figment::providers::Serialized;
use mockable::DefaultClock;
use serde::Serialize;
use std::sync::Arc;
use task_tracker::{app::Application, config::TrackerConfig, http::router};
use tokio::{
    net::TcpListener,
    signal::unix::{SignalKind, signal},
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Upper bound on waiting for queued notifications at shutdown.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Parser, Serialize)]
#[command(
    name = "task-tracker",
    version,
    about = "Task assignment and tracking service",
    long_about = "Serves the task, user, settings and upload API over HTTP."
)]
struct Opt {
    /// TOML configuration file.
    #[clap(long)]
    #[serde(skip)]
    config: Option<Utf8PathBuf>,
    /// Address to listen on.
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    listen_address: Option<SocketAddr>,
    /// Directory for saved collections; omitted means in-memory.
    #[clap(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    data_dir: Option<Utf8PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let opt = Opt::parse();
    let figment = TrackerConfig::figment(opt.config.as_deref()).merge(Serialized::defaults(&opt));
    let config = TrackerConfig::from_figment(&figment)?;

    let Application {
        state,
        notification_worker,
    } = Application::build(&config, Arc::new(DefaultClock)).await?;

    let listener = TcpListener::bind(config.listen_address).await?;
    tracing::info!(address = %listener.local_addr()?, "serving");

    let mut sigterm = signal(SignalKind::terminate())?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received SIGINT, shutting down");
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, shutting down");
                }
            }
        })
        .await?;

    // The router owned the last queue handles; the worker now drains and exits.
    if tokio::time::timeout(DRAIN_TIMEOUT, notification_worker)
        .await
        .is_err()
    {
        tracing::warn!("notification worker did not drain in time");
    }

    Ok(())
}
