use http::Method;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Optional parts of the token request.
///
/// `method` defaults to `POST`; everything else defaults to empty or absent.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RequestOptions {
    #[serde(with = "http_serde::method")]
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Option<RequestBody>,
    pub json: Option<Value>,
    pub query: Vec<(String, String)>,
}

/// Non-JSON request body
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RequestBody {
    /// sent as `application/x-www-form-urlencoded`
    Form(HashMap<String, String>),
    Raw(String),
}

impl RequestBody {
    pub fn is_empty(&self) -> bool {
        match self {
            RequestBody::Form(fields) => fields.is_empty(),
            RequestBody::Raw(raw) => raw.is_empty(),
        }
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::POST,
            headers: HashMap::new(),
            body: None,
            json: None,
            query: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn form(mut self, fields: HashMap<String, String>) -> Self {
        self.body = Some(RequestBody::Form(fields));
        self
    }

    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw(body.into()));
        self
    }

    pub fn json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}
