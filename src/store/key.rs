//! Cache key naming.
//!
//! Keys must stay byte-compatible with data already stored by other clients:
//! the prefix followed by the raw account id, with no separator or escaping.

pub const KEY_PREFIX: &str = "user-token-scheme-account-";

pub fn derive_key(account_id: &str) -> String {
    format!("{KEY_PREFIX}{account_id}")
}
