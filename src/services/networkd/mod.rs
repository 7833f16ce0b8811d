/// D-Bus client for systemd-networkd
mod bus;
/// Byte-level decoders for lease fields
pub mod decode;
/// systemd-networkd service errors
mod error;
/// D-Bus proxy implementations for systemd-networkd interfaces.
mod proxy;
/// Lease normalization across Describe and native reads
mod translator;
/// Decoded link and lease types
mod types;
/// Raw records as delivered over the bus
mod wire;

#[cfg(test)]
mod tests;

pub use bus::{NetworkdBus, NetworkdClient};
pub use error::{DecodeWarning, NetworkdError};
pub use proxy::*;
pub use translator::{LeaseTranslator, LinkWarning, Translation, has_server_detail};
pub use types::*;
pub use wire::*;
