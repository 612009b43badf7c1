/// Request module
///
/// Options for the one-shot HTTP call that fetches a fresh token, and the
/// call itself.

pub mod fetch;
pub mod options;

pub use options::{RequestBody, RequestOptions};
