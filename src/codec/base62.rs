//! Base62 encoding of backend Gids.
//!
//! The backend identifies every entity with a 16-byte Gid, sent over the
//! wire as base64. Public links and URIs use the same number written in
//! base62 with a fixed width of 22 characters.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{MetadataError, Result};

/// Digit symbols, least significant first: digits, lowercase, uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Width of a public ID.
pub const PUBLIC_ID_LEN: usize = 22;

/// Pad symbol for short numbers.
const PAD: u8 = b'0';

/// Encode raw Gid bytes as a public ID.
///
/// The bytes are read as a big-endian unsigned integer. Digits come out of
/// repeated division least significant first; padding is appended to that
/// sequence and the whole is reversed, so pads end up leading. Zero (or an
/// empty slice) encodes to all pads. Numbers of 62^22 and above produce
/// longer strings.
pub fn encode_base62(raw: &[u8]) -> String {
    let mut number: Vec<u8> = raw.iter().copied().skip_while(|&b| b == 0).collect();
    let mut digits = Vec::with_capacity(PUBLIC_ID_LEN);

    while !number.is_empty() {
        let (quotient, remainder) = div_rem_62(&number);
        digits.push(ALPHABET[remainder as usize]);
        number = quotient;
    }

    while digits.len() < PUBLIC_ID_LEN {
        digits.push(PAD);
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Long division of a big-endian number by 62.
///
/// The quotient has no leading zero bytes, so an empty quotient means zero.
fn div_rem_62(number: &[u8]) -> (Vec<u8>, u32) {
    let mut quotient = Vec::with_capacity(number.len());
    let mut remainder: u32 = 0;

    for &byte in number {
        let acc = (remainder << 8) | u32::from(byte);
        let digit = acc / 62;
        remainder = acc % 62;
        if digit != 0 || !quotient.is_empty() {
            quotient.push(digit as u8);
        }
    }

    (quotient, remainder)
}

/// Decode a base64 wire Gid and encode it as a public ID.
///
/// An empty Gid means the field was absent and is rejected.
pub fn gid_to_public_id(gid: &str) -> Result<String> {
    let gid = gid.trim();
    if gid.is_empty() {
        return Err(MetadataError::InvalidGid {
            gid: String::new(),
            reason: "empty".to_string(),
        });
    }
    let raw = STANDARD
        .decode(gid)
        .map_err(|e| MetadataError::InvalidGid {
            gid: gid.to_string(),
            reason: e.to_string(),
        })?;
    Ok(encode_base62(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_all_padding() {
        assert_eq!(encode_base62(&[]), "0".repeat(PUBLIC_ID_LEN));
        assert_eq!(encode_base62(&[0; 16]), "0".repeat(PUBLIC_ID_LEN));
    }

    #[test]
    fn test_padding_leads() {
        assert_eq!(encode_base62(&[0x01]), "0000000000000000000001");
        assert_eq!(encode_base62(&[0xff]), "0000000000000000000047");
        assert_eq!(encode_base62(&[0x01, 0x00]), "0000000000000000000048");
        assert_eq!(encode_base62(&[0x0f, 0x04]), "0000000000000000000100");
    }

    #[test]
    fn test_leading_zero_bytes_do_not_matter() {
        let mut raw = [0u8; 16];
        raw[15] = 1;
        assert_eq!(encode_base62(&raw), encode_base62(&[1]));
    }

    #[test]
    fn test_full_width_gids() {
        let max = [0xffu8; 16];
        assert_eq!(encode_base62(&max), "7N42dgm5tFLK9N8MT7fHC7");

        let raw = [
            0x93, 0xbc, 0x41, 0x4a, 0x60, 0x67, 0x47, 0xb2, 0xb6, 0x12, 0x49, 0x1e, 0xf8, 0x3d,
            0x5a, 0x3e,
        ];
        assert_eq!(encode_base62(&raw), "4uLU6hMCjMI75M1A2tKUQC");
    }

    #[test]
    fn test_distinct_numbers_give_distinct_ids() {
        let ids: std::collections::HashSet<_> =
            (0u16..2000).map(|n| encode_base62(&n.to_be_bytes())).collect();
        assert_eq!(ids.len(), 2000);
        assert!(ids.iter().all(|id| id.len() == PUBLIC_ID_LEN));
    }

    #[test]
    fn test_gid_to_public_id() {
        assert_eq!(
            gid_to_public_id("k7xBSmBnR7K2Ekke+D1aPg==").unwrap(),
            "4uLU6hMCjMI75M1A2tKUQC"
        );
        assert_eq!(
            gid_to_public_id("lGsRMCWHQJyp2ejKzkC5Yg==").unwrap(),
            "4w3NeXtywU398NYW4903rY"
        );
    }

    #[test]
    fn test_invalid_gid() {
        let err = gid_to_public_id("not base64!").unwrap_err();
        assert!(matches!(err, MetadataError::InvalidGid { .. }));
        assert!(!err.is_retryable());
        assert!(gid_to_public_id("").is_err());
    }
}
