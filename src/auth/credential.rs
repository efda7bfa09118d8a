//! Client authorization line formats
//!
//! Tor reads `<name>.auth` from the service's `authorized_clients/`
//! directory and `<name>.auth_private` from the client's
//! `ClientOnionAuthDir`.

/// Key type tag shared by both files
const DESCRIPTOR_X25519: &str = "descriptor:x25519";

const ONION_SUFFIX: &str = ".onion";

/// Strip one trailing `.onion`, leaving anything else untouched
pub fn strip_onion_suffix(address: &str) -> &str {
    address.strip_suffix(ONION_SUFFIX).unwrap_or(address)
}

/// Service side line: `descriptor:x25519:<pub>`
pub fn format_public(encoded_public: &str) -> String {
    format!("{}:{}", DESCRIPTOR_X25519, encoded_public)
}

/// Client side line: `<address>:descriptor:x25519:<priv>`
pub fn format_private(onion_address: &str, encoded_private: &str) -> String {
    format!(
        "{}:{}:{}",
        strip_onion_suffix(onion_address),
        DESCRIPTOR_X25519,
        encoded_private
    )
}
