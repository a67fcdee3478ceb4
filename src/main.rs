use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pingwatch::annotations::AnnotationEngine;
use pingwatch::config::Args;
use pingwatch::server;
use pingwatch_provider::pingdom::PingdomClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let client = PingdomClient::builder()
        .base_url(&args.api_url)
        .credentials(&args.email, &args.password)
        .api_key(&args.api_key)
        .timeout(Duration::from_secs(args.timeout_secs))
        .build();

    let engine = Arc::new(AnnotationEngine::new(client));

    info!(addr = %args.listen, "starting server");

    tokio::select! {
        result = server::run(args.listen, engine) => result?,
        _ = shutdown_signal() => {}
    }

    info!("stopped server");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
