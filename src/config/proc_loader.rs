use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::config::settings::{LoggingConfig, ServiceConfig, DEFAULT_CACHE_URL};

/// Load config from a YAML file, expanding `${VAR}` and `${VAR:default}`
pub async fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read config file {}", path.display()))?;

    let expanded = expand_env_vars(&content)?;
    parse_config(&expanded)
}

pub fn parse_config(content: &str) -> Result<ServiceConfig> {
    let mut service_config: ServiceConfig = if content.trim().is_empty() {
        ServiceConfig::default()
    } else {
        serde_yaml::from_str(content).context("invalid config format")?
    };

    // Apply defaults
    if service_config.logging.is_none() {
        service_config.logging = Some(LoggingConfig::default());
    }
    if service_config.cache.url.trim().is_empty() {
        service_config.cache.url = DEFAULT_CACHE_URL.to_owned();
    }
    debug!(cache_url = %service_config.cache.url, "config loaded");

    Ok(service_config)
}

fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    let expanded = re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    });
    Ok(expanded.into_owned())
}
