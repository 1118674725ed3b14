//! Authenticated JSON client for the Vaultix REST API.
//!
//! The client is deliberately thin: it builds the URL, attaches the bearer
//! token, sends exactly one request and decodes the JSON payload. Non-2xx
//! responses become [`VaultixError::Api`]; nothing is retried.

use std::future::Future;
use std::pin::Pin;

use http::header::CONTENT_TYPE;
use http::Method;
use serde_json::{Map, Value};
use tracing::debug;
use url::form_urlencoded;

use crate::config::VaultixConfig;
use crate::error::{DEFAULT_API_ERROR_CODE, DEFAULT_API_ERROR_MESSAGE, VaultixError};

/// Query parameters of a GET request.
pub type Params = Map<String, Value>;

/// Boxed future returned by [`ApiClient::send`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One outbound call against the Vaultix API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, always starting with `/`.
    pub path: String,
    /// Query parameters; `null` entries are dropped when the URL is built.
    pub params: Option<Params>,
    /// JSON body, only sent for POST/PUT/PATCH.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            params,
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            params: None,
            body,
        }
    }

    pub fn put(path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            params: None,
            body,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            params: None,
            body: None,
        }
    }
}

/// Anything that can execute an [`ApiRequest`].
///
/// The dispatcher only talks to this trait, so tests can swap in a recording
/// stub for the real HTTP client.
pub trait ApiClient: Send + Sync {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, VaultixError>>;
}

/// HTTP client bound to one API key and base URL.
#[derive(Clone)]
pub struct VaultixClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for VaultixClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultixClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl VaultixClient {
    /// Create a client from resolved configuration.
    pub fn new(config: &VaultixConfig) -> Result<Self, VaultixError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str, params: Option<Params>) -> Result<Value, VaultixError> {
        self.request(ApiRequest::get(path, params)).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, VaultixError> {
        self.request(ApiRequest::post(path, body)).await
    }

    pub async fn put(&self, path: &str, body: Option<Value>) -> Result<Value, VaultixError> {
        self.request(ApiRequest::put(path, body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, VaultixError> {
        self.request(ApiRequest::delete(path)).await
    }

    async fn request(&self, request: ApiRequest) -> Result<Value, VaultixError> {
        let url = build_url(&self.base_url, &request.path, request.params.as_ref());
        debug!(method = %request.method, path = %request.path, "Sending Vaultix API request");

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json");

        if sends_body(&request.method) {
            if let Some(body) = request.body.as_ref().filter(|b| !b.is_null()) {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let data: Value =
            serde_json::from_slice(&bytes).map_err(|e| VaultixError::Decode(e.to_string()))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), path = %request.path, "Vaultix API returned an error");
            return Err(api_error(status.as_u16(), &data));
        }

        Ok(data)
    }
}

impl ApiClient for VaultixClient {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, VaultixError>> {
        Box::pin(self.request(request))
    }
}

fn sends_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// Build the full request URL.
///
/// `null` params are skipped; if nothing is left no `?` is appended.
pub fn build_url(base_url: &str, path: &str, params: Option<&Params>) -> String {
    let mut url = format!("{}{}", base_url, path);

    if let Some(params) = params {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut has_pairs = false;
        for (key, value) in params {
            if let Some(value) = query_value(value) {
                query.append_pair(key, &value);
                has_pairs = true;
            }
        }
        if has_pairs {
            url.push('?');
            url.push_str(&query.finish());
        }
    }

    url
}

/// Stringify a query value, or `None` for `null`.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(js_string(other)),
    }
}

/// Render a JSON value the way JavaScript's `String(value)` does.
///
/// Array elements that are `null` render as empty strings and objects render
/// as `[object Object]`, matching what the remote API has always received.
pub fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::Array(items) => items
            .iter()
            .map(|item| query_value(item).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // 10.0 is sent as "10"
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Decode a non-2xx payload into [`VaultixError::Api`].
fn api_error(status: u16, data: &Value) -> VaultixError {
    let error = data.get("error");
    let field = |name: &str| {
        error
            .and_then(|e| e.get(name))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    VaultixError::Api {
        message: field("message").unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_string()),
        code: field("code").unwrap_or_else(|| DEFAULT_API_ERROR_CODE.to_string()),
        status,
    }
}
