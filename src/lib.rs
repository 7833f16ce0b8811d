//! networkd-exporter - Prometheus metrics for systemd-networkd DHCP servers.
//!
//! Every scrape asks systemd-networkd over D-Bus for its DHCP server state,
//! decodes the binary lease records and renders them as gauges:
//!
//! - `Manager.Describe` is preferred, as it carries pool settings and
//!   static leases
//! - links it does not describe fall back to the per-link
//!   `DHCPServer.Leases` property
//! - leases whose address cannot be decoded are logged, never exported
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use networkd_exporter::{
//!     metrics::{MetricProjector, MetricSource, NetworkdCollector},
//!     services::NetworkdClient,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NetworkdClient::connect(None).await?;
//! let collector = NetworkdCollector::new(client, MetricProjector::default());
//!
//! let families = collector.scrape().await;
//! println!("collected {} metric families", families.len());
//! # Ok(())
//! # }
//! ```

/// Process configuration from flags and environment.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Metric projection and per-scrape collection.
pub mod metrics;

/// HTTP metrics endpoint.
pub mod server;

/// D-Bus services the exporter reads from.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{ExporterError, Result};
