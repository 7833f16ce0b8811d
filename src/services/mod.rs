/// systemd-networkd DHCP server state over D-Bus
pub mod networkd;

pub use networkd::{
    DhcpServer, Interface, Lease, LeaseTranslator, NetworkdBus, NetworkdClient, NetworkdError,
    StaticLease,
};
