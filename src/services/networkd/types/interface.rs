//! Decoded links and their DHCP servers.

use super::{Lease, StaticLease};

/// A network link known to networkd, rebuilt on every scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    /// Interface name, stable within a boot.
    pub name: String,
    /// Kernel interface index, correlates the Describe document with ListLinks.
    pub index: i32,
    /// Present only if networkd runs a DHCP server on this link.
    pub dhcp_server: Option<DhcpServer>,
}

/// DHCP server configuration and state attached to one interface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DhcpServer {
    /// Configured pool size, if networkd reports it.
    pub pool_size: Option<u32>,
    /// Configured pool offset, if networkd reports it.
    pub pool_offset: Option<u32>,
    /// Dynamic leases, in the order networkd reported them.
    pub leases: Vec<Lease>,
    /// Static reservations, in the order networkd reported them.
    pub static_leases: Vec<StaticLease>,
}
