//! systemd-networkd D-Bus proxy definitions.
//!
//! Type-safe proxy interfaces for the networkd objects the exporter reads.

#![allow(missing_docs)]
pub mod dhcp_server;
pub mod manager;

pub use dhcp_server::*;
pub use manager::*;
