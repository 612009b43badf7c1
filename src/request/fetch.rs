use reqwest::Client;
use tracing::debug;

use crate::request::options::{RequestBody, RequestOptions};

/// Issue exactly one request and return the response body as text.
///
/// Transport failures and non-2xx statuses come back as `reqwest::Error`.
/// When both a non-empty body and a JSON payload are set, the body is sent and
/// the JSON payload is ignored; an empty body gives way to the JSON payload.
pub async fn send(client: &Client, url: &str, options: &RequestOptions) -> reqwest::Result<String> {
    let mut request = client.request(options.method.clone(), url);

    for (key, value) in &options.headers {
        request = request.header(key, value);
    }
    if !options.query.is_empty() {
        request = request.query(&options.query);
    }

    let body = options.body.as_ref().filter(|body| !body.is_empty());
    match (body, &options.json) {
        (Some(RequestBody::Form(fields)), _) => request = request.form(fields),
        (Some(RequestBody::Raw(raw)), _) => request = request.body(raw.to_owned()),
        (None, Some(json)) => request = request.json(json),
        (None, None) => {}
    }

    debug!(method = %options.method, url, "requesting new token");
    let response = request.send().await?.error_for_status()?;
    response.text().await
}
