//! Waypoint server binary: wires configuration, store, channel, and the
//! HTTP module, then serves until interrupted.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use waypoint_server::channel::{spawn_logging_relay, QueueChannel};
use waypoint_server::network::NetworkModule;
use waypoint_server::service::DestinationService;
use waypoint_server::storage::MemoryStore;
use waypoint_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    info!(
        database = %config.database,
        collection = %config.collection,
        queue = %config.queue,
        "starting waypoint server"
    );

    let store = Arc::new(MemoryStore::new());
    let (channel, events) = QueueChannel::new(config.queue.clone(), config.event_capacity);
    let relay = spawn_logging_relay(config.queue.clone(), events);

    let service = Arc::new(DestinationService::new(store, Arc::new(channel)));

    let mut module = NetworkModule::new(config.network(), service);
    let port = module.start().await?;
    info!(host = %config.host, port, "accepting requests");

    module
        .serve(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("interrupt received, shutting down");
        })
        .await?;

    // Serving dropped the last channel sender; the relay finishes once the
    // queue is empty.
    relay.await?;
    Ok(())
}
