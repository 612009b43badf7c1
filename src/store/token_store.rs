use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::cache::{KeyValueCache, RedisCache};
use crate::config::settings::{HttpConfig, ServiceConfig};
use crate::errors::errors::{StoreError, StoreResult, TokenError};
use crate::parser::token_path::{extract_token, parse_body, token_text};
use crate::request::fetch::send;
use crate::request::options::RequestOptions;
use crate::store::key::derive_key;

/// Store for per-account auth tokens.
///
/// Every call is one cache round trip, optionally preceded by one HTTP round
/// trip for [`TokenStore::get_new`]. Nothing is locked: concurrent writers on
/// the same account race and the last write wins.
#[derive(Debug)]
pub struct TokenStore<C: KeyValueCache = RedisCache> {
    cache: C,
    client: Client,
}

impl TokenStore<RedisCache> {
    /// Build a Redis backed store.
    ///
    /// The URL is validated here; the connection is opened on first use.
    pub fn new(cache_url: &str) -> StoreResult<Self> {
        Ok(Self::with_parts(RedisCache::new(cache_url)?, Client::new()))
    }

    pub fn from_config(config: &ServiceConfig) -> StoreResult<Self> {
        let cache = RedisCache::new(&config.cache.url)?;
        let client = build_client(&config.http)?;
        Ok(Self::with_parts(cache, client))
    }
}

impl<C: KeyValueCache> TokenStore<C> {
    pub fn with_parts(cache: C, client: Client) -> Self {
        Self { cache, client }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Stored token for `account_id`. An empty stored value counts as absent.
    pub async fn get(&self, account_id: &str) -> StoreResult<String> {
        let token = self.cache.get_value(&derive_key(account_id)).await?;
        match token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => {
                debug!(account_id, "no token stored");
                Err(StoreError::NoSuchToken { account_id: account_id.to_owned() })
            }
        }
    }

    pub async fn set(&self, account_id: &str, token: &str) -> StoreResult<()> {
        self.cache.set_value(&derive_key(account_id), token).await?;
        debug!(account_id, "token stored");
        Ok(())
    }

    pub async fn delete(&self, account_id: &str) -> StoreResult<()> {
        self.cache.delete_value(&derive_key(account_id)).await?;
        debug!(account_id, "token deleted");
        Ok(())
    }

    /// Fetch a fresh token from `url`, store it for `account_id` and return it.
    ///
    /// `token_path` lists the object keys leading to the token in the JSON
    /// response, e.g. `["CustomerSignOnResult", "token"]`; a flat response
    /// still takes a one-element path. JSON and path failures become
    /// [`StoreError::Token`] and leave the cache untouched; transport errors
    /// are returned as [`StoreError::Http`].
    pub async fn get_new<S: AsRef<str>>(
        &self,
        url: &str,
        token_path: &[S],
        account_id: &str,
        options: &RequestOptions,
    ) -> StoreResult<String> {
        if token_path.is_empty() {
            return Err(TokenError::EmptyPath.into());
        }

        let body = send(&self.client, url, options).await?;
        let json = parse_body(&body)?;
        let token = token_text(&extract_token(&json, token_path)?);

        self.cache.set_value(&derive_key(account_id), &token).await?;
        info!(account_id, "new token fetched and stored");
        Ok(token)
    }
}

fn build_client(http: &HttpConfig) -> reqwest::Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout_ms) = http.timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }
    if let Some(user_agent) = &http.user_agent {
        builder = builder.user_agent(user_agent);
    }
    builder.build()
}
