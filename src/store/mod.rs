pub mod key;
pub mod token_store;

pub use key::{derive_key, KEY_PREFIX};
pub use token_store::TokenStore;
