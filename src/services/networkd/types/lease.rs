//! Decoded leases.

use std::net::IpAddr;

use chrono::{DateTime, Utc};

/// A dynamic DHCP address assignment.
///
/// `address` is `None` when the raw record could not be decoded; such leases
/// stay in the model but are never exported.
#[derive(Debug, Clone, PartialEq)]
pub struct Lease {
    /// Decoded client identifier.
    pub client_id: String,
    /// Assigned address.
    pub address: Option<IpAddr>,
    /// Hostname sent by the client, may be empty.
    pub hostname: String,
    /// Wall-clock time at which the lease expires.
    pub expiration: DateTime<Utc>,
}

/// A fixed, non-expiring DHCP reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLease {
    /// Decoded client identifier.
    pub client_id: String,
    /// Reserved address.
    pub address: Option<IpAddr>,
}
