use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::services::networkd::DecodeWarning;

const AF_INET: u32 = libc::AF_INET as u32;
const AF_INET6: u32 = libc::AF_INET6 as u32;

/// Decodes an address from a native lease, checked against its family code.
///
/// # Errors
/// Returns [`DecodeWarning::UnknownAddressFamily`] for families other than
/// `AF_INET`/`AF_INET6`, and [`DecodeWarning::InvalidAddressLength`] when the
/// byte count does not match the family.
pub fn decode_native_address(family: u32, bytes: &[u8]) -> Result<IpAddr, DecodeWarning> {
    match family {
        AF_INET => <[u8; 4]>::try_from(bytes)
            .map(|octets| IpAddr::V4(Ipv4Addr::from(octets)))
            .map_err(|_| invalid_length(bytes)),
        AF_INET6 => <[u8; 16]>::try_from(bytes)
            .map(|octets| IpAddr::V6(Ipv6Addr::from(octets)))
            .map_err(|_| invalid_length(bytes)),
        family => Err(DecodeWarning::UnknownAddressFamily {
            family,
            bytes: bytes.to_vec(),
        }),
    }
}

/// Decodes an address whose family is implied by its length (4 or 16 bytes).
///
/// # Errors
/// Returns [`DecodeWarning::InvalidAddressLength`] for any other length.
pub fn decode_address(bytes: &[u8]) -> Result<IpAddr, DecodeWarning> {
    match bytes.len() {
        4 => decode_native_address(AF_INET, bytes),
        16 => decode_native_address(AF_INET6, bytes),
        _ => Err(invalid_length(bytes)),
    }
}

fn invalid_length(bytes: &[u8]) -> DecodeWarning {
    DecodeWarning::InvalidAddressLength {
        bytes: bytes.to_vec(),
    }
}
