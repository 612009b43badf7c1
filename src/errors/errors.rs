use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by [`crate::store::token_store::TokenStore`].
///
/// Only `NoSuchToken` and `Token` originate here. Cache and HTTP failures are
/// passed through transparently so callers see the collaborator's own error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("there is no token stored for account `{account_id}`")]
    NoSuchToken { account_id: String },

    #[error("there was an error getting user token from request")]
    Token(#[from] TokenError),

    #[error(transparent)]
    Cache(#[from] redis::RedisError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl StoreError {
    pub fn is_no_such_token(&self) -> bool {
        matches!(self, StoreError::NoSuchToken { .. })
    }

    pub fn is_token_error(&self) -> bool {
        matches!(self, StoreError::Token(_))
    }
}

/// Extraction failures for a freshly fetched token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("response body is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("key `{key}` not found at depth {depth}")]
    MissingKey { key: String, depth: usize },

    #[error("value at depth {depth} is not an object, cannot look up key `{key}`")]
    NotAnObject { key: String, depth: usize },

    #[error("token path is empty")]
    EmptyPath,
}
