//! # User Token Store
//!
//! Keeps one auth token per account in a key-value cache (Redis), and can
//! fetch a fresh token from a remote endpoint, pulling it out of a nested JSON
//! response by a path of keys.
//!
//! Modules:
//! - `store` — the token store and cache key naming
//! - `cache` — cache contract with Redis and in-memory backends
//! - `request` — options and transport for the token request
//! - `parser` — walking a JSON response down to the token
//! - `config` — YAML configuration
//! - `utils` — logging and config loading helpers

pub mod cache;
pub mod config;
pub mod errors;
pub mod parser;
pub mod request;
pub mod store;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::config::settings::ServiceConfig;
pub use crate::errors::errors::{StoreError, StoreResult, TokenError};
pub use crate::request::{RequestBody, RequestOptions};
pub use crate::store::{derive_key, TokenStore, KEY_PREFIX};
