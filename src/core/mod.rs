use std::net::SocketAddr;

use thiserror::Error;

use crate::services::NetworkdError;

/// Error types for the exporter process.
///
/// Scrape-time failures are logged and never reach `main`; everything here
/// either aborts one scrape or prevents the process from starting.
#[derive(Error, Debug)]
pub enum ExporterError {
    /// systemd-networkd could not be queried or its reply decoded
    #[error(transparent)]
    Networkd(#[from] NetworkdError),

    /// Metric registration or encoding failed
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// Connecting to the D-Bus daemon failed
    #[error("failed connecting to D-Bus at '{address}': {source}")]
    BusConnection {
        /// Bus address, or "system" for the system bus
        address: String,
        /// Underlying zbus error
        source: zbus::Error,
    },

    /// The metrics listener could not be bound
    #[error("failed to listen on {address}: {source}")]
    Listen {
        /// Requested listen address
        address: SocketAddr,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// A specialized `Result` type for exporter operations.
pub type Result<T> = std::result::Result<T, ExporterError>;

impl ExporterError {
    /// Creates a bus connection error, labelling the system bus as "system".
    pub fn bus_connection(error: zbus::Error, address: Option<&str>) -> Self {
        ExporterError::BusConnection {
            address: address.unwrap_or("system").to_string(),
            source: error,
        }
    }
}
