//! Process flags with environment fallbacks.

mod log_format;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use clap::Parser;

pub use log_format::LogFormat;

use crate::metrics::DEFAULT_NAMESPACE;

/// Exports systemd-networkd DHCP server leases as Prometheus metrics.
#[derive(Debug, Clone, Parser)]
#[command(name = "networkd-exporter", version)]
pub struct Config {
    /// The address to listen on for HTTP requests.
    #[arg(
        long,
        env = "NETWORKD_EXPORTER_LISTEN_ADDRESS",
        default_value = "0.0.0.0:15694"
    )]
    pub listen_address: SocketAddr,

    /// Address of the D-Bus daemon to connect to. Defaults to the system bus.
    #[arg(long = "dbus-addr", env = "NETWORKD_EXPORTER_DBUS_ADDRESS")]
    pub dbus_address: Option<String>,

    /// Path under which metrics are served.
    #[arg(
        long,
        env = "NETWORKD_EXPORTER_METRICS_PATH",
        default_value = "/metrics",
        value_parser = parse_metrics_path
    )]
    pub metrics_path: String,

    /// Prefix of every exported metric name.
    #[arg(long, env = "NETWORKD_EXPORTER_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Log output format.
    #[arg(
        long,
        env = "NETWORKD_EXPORTER_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}

fn parse_metrics_path(path: &str) -> Result<String, String> {
    if path.starts_with('/') {
        Ok(path.to_string())
    } else {
        Err(format!("metrics path '{path}' must start with '/'"))
    }
}
