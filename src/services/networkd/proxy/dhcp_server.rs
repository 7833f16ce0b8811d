//! systemd-networkd per-link DHCP server interface.

use zbus::proxy;

/// Raw native lease: family, client id, address, gateway, chaddr, expiration.
pub type NativeLeaseTuple = (u32, Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>, u64);

/// DHCP Server State.
///
/// Exposed on a link object only when networkd runs a DHCP server on it.
#[proxy(
    default_service = "org.freedesktop.network1",
    interface = "org.freedesktop.network1.DHCPServer"
)]
pub trait DHCPServer {
    /// Leases currently handed out by the server.
    ///
    /// Expirations are CLOCK_BOOTTIME microseconds.
    #[zbus(property)]
    fn leases(&self) -> zbus::Result<Vec<NativeLeaseTuple>>;
}
