//! networkd-exporter - serves systemd-networkd DHCP lease metrics over HTTP.

use std::{error::Error, sync::Arc};

use clap::Parser;
use networkd_exporter::{
    ExporterError,
    config::Config,
    metrics::{MetricProjector, NetworkdCollector, exporter_registry},
    server::{MetricsEndpointConfig, run_metrics_endpoint},
    services::NetworkdClient,
    tracing_config,
};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    tracing_config::init(config.log_format)?;

    let client = NetworkdClient::connect(config.dbus_address.as_deref())
        .await
        .map_err(|err| ExporterError::bus_connection(err, config.dbus_address.as_deref()))?;

    let registry = exporter_registry(&config.namespace).map_err(ExporterError::from)?;
    let projector = MetricProjector::new(config.namespace.as_str());
    info!(namespace = projector.namespace(), "exporting DHCP server metrics");
    let collector = NetworkdCollector::new(client, projector);

    let endpoint = MetricsEndpointConfig {
        address: config.listen_address,
        metrics_path: config.metrics_path.clone(),
        registry,
        source: Arc::new(collector),
    };

    info!(
        "started networkd-exporter and listening at {}",
        config.listen_address
    );

    tokio::select! {
        result = run_metrics_endpoint(endpoint) => result?,
        _ = signal::ctrl_c() => info!("received interrupt, shutting down"),
    }

    Ok(())
}
