use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use http::Method;
use tracing::info;
use user_token_store::utils::logging::LogLevel;
use user_token_store::utils::{config_loader, logging};
use user_token_store::{RequestOptions, TokenStore};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG")]
    config: Option<String>,
    /// overrides `cache.url` from the config file
    #[arg(long, env = "REDIS_URL")]
    cache_url: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stored token
    Get { account_id: String },
    /// Store a token, replacing any previous one
    Set { account_id: String, token: String },
    /// Remove the stored token
    Delete { account_id: String },
    /// Fetch a fresh token from a remote endpoint, store and print it
    GetNew {
        account_id: String,
        #[arg(long)]
        url: String,
        /// JSON key leading to the token; repeat for nested responses
        #[arg(long = "path", required = true)]
        token_path: Vec<String>,
        #[arg(long, default_value = "POST")]
        method: String,
        /// `Name: value`
        #[arg(long = "header")]
        headers: Vec<String>,
        /// `key=value`, sent form-encoded
        #[arg(long = "form", conflicts_with = "data")]
        form: Vec<String>,
        /// raw request body
        #[arg(long)]
        data: Option<String>,
        /// JSON request body
        #[arg(long)]
        json: Option<String>,
        /// `key=value` query parameter
        #[arg(long = "query")]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // -------------------------------
    // 1. Load config and logging
    // -------------------------------

    let mut service_config = config_loader::run(args.config.as_deref()).await?;
    if let Some(cache_url) = args.cache_url {
        service_config.cache.url = cache_url;
    }
    logging::run(&service_config, args.log_level);

    // -------------------------------
    // 2. Build store (connects on first use)
    // -------------------------------

    let store = TokenStore::from_config(&service_config)?;

    // -------------------------------
    // 3. Run command
    // -------------------------------

    match args.command {
        Command::Get { account_id } => {
            println!("{}", store.get(&account_id).await?);
        }
        Command::Set { account_id, token } => {
            store.set(&account_id, &token).await?;
            info!(account_id = %account_id, "token set");
        }
        Command::Delete { account_id } => {
            store.delete(&account_id).await?;
            info!(account_id = %account_id, "token deleted");
        }
        Command::GetNew { account_id, url, token_path, method, headers, form, data, json, query } => {
            let mut options = RequestOptions::new().method(
                Method::from_bytes(method.to_uppercase().as_bytes())
                    .with_context(|| format!("invalid HTTP method '{}'", method))?,
            );
            for header in &headers {
                let (name, value) = split_pair(header, ':')?;
                options = options.header(name, value);
            }
            if !form.is_empty() {
                let fields = form
                    .iter()
                    .map(|field| split_pair(field, '='))
                    .collect::<Result<HashMap<_, _>>>()?;
                options = options.form(fields);
            }
            if let Some(data) = data {
                options = options.raw_body(data);
            }
            if let Some(json) = json {
                options = options.json(serde_json::from_str(&json).context("--json is not valid JSON")?);
            }
            for param in &query {
                let (key, value) = split_pair(param, '=')?;
                options = options.query(key, value);
            }

            println!("{}", store.get_new(&url, token_path.as_slice(), &account_id, &options).await?);
        }
    }

    Ok(())
}

fn split_pair(raw: &str, separator: char) -> Result<(String, String)> {
    raw.split_once(separator)
        .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| anyhow!("expected `key{}value`, got '{}'", separator, raw))
}
