//! Base32 key encoding (RFC 4648 alphabet, uppercase, unpadded)

use super::keys::KEY_LEN;
use base32::Alphabet;

const ALPHABET: Alphabet = Alphabet::Rfc4648 { padding: false };

/// Length of an encoded 32-byte key: ceil(256 / 5)
pub const ENCODED_KEY_LEN: usize = 52;

/// Encode a 32-byte key
pub fn encode(key: &[u8; KEY_LEN]) -> String {
    base32::encode(ALPHABET, key)
}

/// Decode an encoded key back to 32 bytes
///
/// Returns `None` for malformed input or a length other than 32 bytes.
pub fn decode(encoded: &str) -> Option<[u8; KEY_LEN]> {
    if encoded.len() != ENCODED_KEY_LEN {
        return None;
    }
    base32::decode(ALPHABET, encoded)?.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_shape() {
        for fill in [0x00u8, 0x5a, 0xff] {
            let encoded = encode(&[fill; 32]);
            assert_eq!(encoded.len(), ENCODED_KEY_LEN);
            assert!(!encoded.contains('='));
            assert!(encoded
                .chars()
                .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)));
        }
    }

    #[test]
    fn test_known_encoding() {
        assert_eq!(encode(&[0u8; 32]), "A".repeat(52));
        // 0xff * 32 = 256 one-bits; the final symbol carries one bit plus four zero pad bits
        assert_eq!(encode(&[0xff; 32]), format!("{}Q", "7".repeat(51)));
    }

    #[test]
    fn test_decode_recovers_key() {
        let mut key = [0u8; 32];
        for (i, b) in key.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        assert_eq!(decode(&encode(&key)), Some(key));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(decode("AAAA"), None);
        assert_eq!(decode(&"A".repeat(56)), None);
    }
}
