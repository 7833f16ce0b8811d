/// systemd-networkd service errors.
///
/// Every variant is fatal to the scrape that produced it.
#[derive(thiserror::Error, Debug)]
pub enum NetworkdError {
    /// D-Bus communication error (connection lost, method unknown, call rejected)
    #[error("D-Bus operation failed: {0}")]
    Transport(#[from] zbus::Error),

    /// The Describe document could not be parsed
    #[error("Failed to parse Describe document: {0}")]
    DocumentDecode(#[from] serde_json::Error),

    /// The boot-relative clock could not be read
    #[error("Failed to read CLOCK_BOOTTIME: {0}")]
    Clock(#[from] nix::errno::Errno),
}

/// A single lease record that could not be fully decoded.
///
/// Warnings are local to one record: they are logged, the affected record
/// loses its address, and decoding of sibling records carries on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Native lease tagged with a family other than AF_INET or AF_INET6
    #[error("unknown address family {family:#x} for address bytes {bytes:?}")]
    UnknownAddressFamily {
        /// Raw family code from the record.
        family: u32,
        /// Raw address bytes from the record.
        bytes: Vec<u8>,
    },

    /// Address bytes do not fit the declared or implied family
    #[error("error parsing bytes {bytes:?} into ip address")]
    InvalidAddressLength {
        /// Raw address bytes from the record.
        bytes: Vec<u8>,
    },

    /// Client identifier buffer had no type tag
    #[error("empty client identifier")]
    EmptyClientId,

    /// Type 1 client identifier whose payload is not a 6 byte hardware address
    #[error("client identifier of type 1 has {len} bytes of hardware address, expected 6")]
    InvalidHardwareAddress {
        /// Payload length after the type tag.
        len: usize,
    },

    /// Described interface index that ListLinks did not return
    #[error("link with index {index} not returned by ListLinks")]
    UnknownLink {
        /// Interface index from the Describe document.
        index: i32,
    },
}
