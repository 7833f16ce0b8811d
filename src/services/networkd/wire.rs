//! Raw records exactly as systemd-networkd delivers them.
//!
//! Nothing here is decoded: addresses and client identifiers stay byte
//! buffers and expirations stay CLOCK_BOOTTIME microseconds. The
//! [`translator`](super::translator) turns these into the domain types.

use serde::Deserialize;
use zbus::zvariant::OwnedObjectPath;

use super::proxy::NativeLeaseTuple;

/// A link as returned by `Manager.ListLinks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeLink {
    /// Kernel interface index.
    pub index: i32,
    /// Interface name.
    pub name: String,
    /// Object path of the link, used for per-link property reads.
    pub path: OwnedObjectPath,
}

impl From<(i32, String, OwnedObjectPath)> for NativeLink {
    fn from((index, name, path): (i32, String, OwnedObjectPath)) -> Self {
        Self { index, name, path }
    }
}

/// A lease as read from the `DHCPServer.Leases` property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLease {
    /// Address family code (`AF_INET` or `AF_INET6`).
    pub family: u32,
    /// Type-tagged client identifier.
    pub client_id: Vec<u8>,
    /// Assigned address bytes.
    pub address: Vec<u8>,
    /// Gateway address bytes.
    pub gateway: Vec<u8>,
    /// Client hardware address.
    pub hardware_address: Vec<u8>,
    /// Expiration in CLOCK_BOOTTIME microseconds.
    pub expiration_usec: u64,
}

impl From<NativeLeaseTuple> for RawLease {
    fn from(
        (family, client_id, address, gateway, hardware_address, expiration_usec): NativeLeaseTuple,
    ) -> Self {
        Self {
            family,
            client_id,
            address,
            gateway,
            hardware_address,
            expiration_usec,
        }
    }
}

/// Top-level object returned by `Manager.Describe`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDocument {
    /// All links known to networkd.
    #[serde(default)]
    pub interfaces: Vec<DescribedInterface>,
}

/// One entry of the `Interfaces` array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribedInterface {
    /// Interface name.
    pub name: String,
    /// Kernel interface index, correlates with [`NativeLink::index`].
    pub index: i32,
    /// Only exported by networkd versions that describe their DHCP server.
    #[serde(default, rename = "DHCPServer")]
    pub dhcp_server: Option<DescribedDhcpServer>,
}

/// The `DHCPServer` object of a described interface.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribedDhcpServer {
    /// Configured pool size.
    #[serde(default)]
    pub pool_size: Option<u32>,
    /// Configured pool offset.
    #[serde(default)]
    pub pool_offset: Option<u32>,
    /// Dynamic leases.
    #[serde(default)]
    pub leases: Vec<DescribedLease>,
    /// Static reservations.
    #[serde(default)]
    pub static_leases: Vec<DescribedStaticLease>,
}

/// A dynamic lease inside the Describe document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribedLease {
    /// Type-tagged client identifier.
    #[serde(default)]
    pub client_id: Vec<u8>,
    /// Assigned address bytes, family implied by length.
    #[serde(default)]
    pub address: Vec<u8>,
    /// Hostname sent by the client.
    #[serde(default)]
    pub hostname: String,
    /// Expiration in CLOCK_BOOTTIME microseconds.
    #[serde(default, rename = "ExpirationUSec")]
    pub expiration_usec: u64,
}

/// A static lease inside the Describe document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribedStaticLease {
    /// Type-tagged client identifier.
    #[serde(default)]
    pub client_id: Vec<u8>,
    /// Reserved address bytes, family implied by length.
    #[serde(default)]
    pub address: Vec<u8>,
}

impl DescribeDocument {
    /// Parses the JSON text returned by `Manager.Describe`.
    ///
    /// # Errors
    /// Returns the serde_json error if the text is not a Describe document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
