use crate::services::networkd::DecodeWarning;

const HARDWARE_ADDRESS_LEN: usize = 6;

/// Renders a type-tagged DHCP client identifier.
///
/// The first byte selects the representation: `0` is a text identifier,
/// `1` an Ethernet hardware address, `2..=254` an ARP/link-layer type and
/// `255` an IAID/DUID pair.
///
/// # Errors
/// Returns [`DecodeWarning::EmptyClientId`] for an empty buffer and
/// [`DecodeWarning::InvalidHardwareAddress`] when a type 1 payload is shorter
/// than six bytes.
pub fn decode_client_id(raw: &[u8]) -> Result<String, DecodeWarning> {
    let (&kind, payload) = raw.split_first().ok_or(DecodeWarning::EmptyClientId)?;

    match kind {
        0 => Ok(String::from_utf8_lossy(payload).into_owned()),
        1 => format_hardware_address(payload),
        2..=254 => Ok("ARP/LL".to_string()),
        255 => Ok("IAID/DUID".to_string()),
    }
}

// Bytes past the hardware address are ignored.
fn format_hardware_address(payload: &[u8]) -> Result<String, DecodeWarning> {
    let hardware_address = payload
        .get(..HARDWARE_ADDRESS_LEN)
        .ok_or(DecodeWarning::InvalidHardwareAddress { len: payload.len() })?;

    Ok(hardware_address
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(":"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn text_identifier_is_returned_verbatim() {
        let mut raw = vec![0];
        raw.extend_from_slice(b"my-client");

        assert_eq!(decode_client_id(&raw).unwrap(), "my-client");
    }

    #[test]
    fn hardware_address_is_lower_case_hex() {
        let raw = [1, 0xAA, 0xbb, 0x0c, 0x00, 0xFF, 0x12];

        assert_eq!(decode_client_id(&raw).unwrap(), "aa:bb:0c:00:ff:12");
    }

    #[test]
    fn trailing_bytes_after_hardware_address_are_ignored() {
        let raw = [1, 0x52, 0x54, 0x00, 0x12, 0x34, 0x56, 0x99];

        assert_eq!(decode_client_id(&raw).unwrap(), "52:54:00:12:34:56");
    }

    #[test]
    fn every_link_layer_tag_is_arp_ll() {
        for tag in 2..=254u8 {
            let raw = [tag, 1, 2, 3];
            assert_eq!(decode_client_id(&raw).unwrap(), "ARP/LL", "tag {tag}");
        }
    }

    #[test]
    fn tag_255_is_iaid_duid() {
        let raw = [255, 0, 0, 0, 1, 0, 4, 9, 9];

        assert_eq!(decode_client_id(&raw).unwrap(), "IAID/DUID");
    }

    #[test]
    fn tag_without_payload_still_decodes() {
        assert_eq!(decode_client_id(&[0]).unwrap(), "");
        assert_eq!(decode_client_id(&[42]).unwrap(), "ARP/LL");
    }

    #[test]
    fn empty_buffer_is_a_warning() {
        assert_eq!(decode_client_id(&[]), Err(DecodeWarning::EmptyClientId));
    }

    #[test]
    fn short_hardware_address_is_a_warning() {
        let raw = [1, 0xaa, 0xbb, 0xcc];

        assert_eq!(
            decode_client_id(&raw),
            Err(DecodeWarning::InvalidHardwareAddress { len: 3 })
        );
    }
}
