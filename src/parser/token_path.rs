use serde_json::Value;
use tracing::debug;

use crate::errors::errors::TokenError;

/// Parse a raw response body into a JSON value.
pub fn parse_body(body: &str) -> Result<Value, TokenError> {
    serde_json::from_str(body).map_err(TokenError::InvalidJson)
}

/// Walk `json` one object key at a time and return the value found at the end
/// of `token_path`.
///
/// Only JSON objects can be indexed. Arrays, strings, numbers, booleans and
/// null stop the walk with [`TokenError::NotAnObject`].
pub fn extract_token<S: AsRef<str>>(json: &Value, token_path: &[S]) -> Result<Value, TokenError> {
    if token_path.is_empty() {
        return Err(TokenError::EmptyPath);
    }

    let leaf = token_path
        .iter()
        .enumerate()
        .try_fold(json, |current, (depth, key)| {
            let key = key.as_ref();
            match current {
                Value::Object(map) => map.get(key).ok_or_else(|| TokenError::MissingKey {
                    key: key.to_owned(),
                    depth,
                }),
                _ => Err(TokenError::NotAnObject { key: key.to_owned(), depth }),
            }
        })?;

    debug!(depth = token_path.len(), "token located in response body");
    Ok(leaf.clone())
}

/// Textual form written to the cache.
///
/// Strings go through verbatim, any other leaf as its compact JSON text.
pub fn token_text(leaf: &Value) -> String {
    match leaf {
        Value::String(s) => s.to_owned(),
        other => other.to_string(),
    }
}
