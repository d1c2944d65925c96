//! # plivo-rest
//!
//! Authenticated requests against the Plivo REST API.
//!
//! [`RestClient`] turns a path, an HTTP verb and a set of form fields into an
//! [`HttpRequest`] carrying HTTP basic credentials, hands it to a
//! [`Transport`], and returns the raw response body. Statuses of 300 and above
//! become [`RestError::Http`]; response bodies are never interpreted.
//!
//! ```rust,no_run
//! use plivo_rest::{Config, RestClient};
//! # #[cfg(feature = "reqwest")] {
//! use plivo_rest::ReqwestTransport;
//!
//! let client = RestClient::new(
//!     Config {
//!         base_url:   "http://127.0.0.1:8088".into(),
//!         auth_id:    "MAXXXXXXXXXXXXXXXXXX".into(),
//!         auth_token: "token".into(),
//!     },
//!     ReqwestTransport::new(),
//! );
//! let body = client.call([
//!     ("From", "1000"),
//!     ("To", "2000"),
//!     ("Gateways", "user/"),
//!     ("AnswerUrl", "http://example.com/answer"),
//! ])?;
//! # }
//! # Ok::<(), plivo_rest::RestError>(())
//! ```

#![deny(unsafe_code)]

mod errors;
mod transport;
#[cfg(feature = "reqwest")]
mod reqwest_transport;

pub use errors::{RestError, TransportError};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Content type of every request body the client sends.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const NO_VARS: [(&str, &str); 0] = [];

// ─── Config ───────────────────────────────────────────────────────────────────

/// Endpoint and credentials of a REST API account.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// API root, e.g. `http://127.0.0.1:8088`. Paths are appended verbatim.
    pub base_url:   String,
    pub auth_id:    String,
    pub auth_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url:   "http://127.0.0.1:8088".into(),
            auth_id:    String::new(),
            auth_token: String::new(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("auth_id", &self.auth_id)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

// ─── RestClient ───────────────────────────────────────────────────────────────

/// REST API client over a [`Transport`].
pub struct RestClient<T> {
    config:    Config,
    transport: T,
}

impl<T: Transport> RestClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request [`RestClient::request`] would send, without sending it.
    ///
    /// `path` is relative to the base URL; a missing leading `/` is added.
    /// For GET the fields go into the query string, otherwise into a
    /// form-encoded body.
    pub fn build_request<I, K, V>(&self, path: &str, method: Method, vars: I) -> Result<HttpRequest, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if path.is_empty() {
            return Err(RestError::InvalidPath);
        }
        let mut uri = self.config.base_url.clone();
        if !path.starts_with('/') {
            uri.push('/');
        }
        uri.push_str(path);

        let vars: Vec<(K, V)> = vars.into_iter().collect();
        let mut headers = vec![("Authorization".to_owned(), self.authorization())];

        let body = match method {
            Method::Get => {
                if !vars.is_empty() {
                    append_query(&mut uri, &form_encode(&vars));
                }
                None
            }
            Method::Post | Method::Put | Method::Delete => {
                headers.push(("Content-Type".to_owned(), FORM_CONTENT_TYPE.to_owned()));
                Some(form_encode(&vars))
            }
        };

        Ok(HttpRequest { method, url: uri, headers, body })
    }

    /// Send a request and return the raw response body.
    ///
    /// # Errors
    /// [`RestError::InvalidPath`] for an empty path, [`RestError::Transport`]
    /// when the transport fails, [`RestError::Http`] for statuses ≥ 300.
    pub fn request<I, K, V>(&self, path: &str, method: Method, vars: I) -> Result<Vec<u8>, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = self.build_request(path, method, vars)?;
        tracing::debug!("[rest] {method} {path}");

        let response = self
            .transport
            .send(&request)
            .map_err(|e| RestError::Transport(Box::new(e)))?;

        if response.status >= 300 {
            tracing::warn!("[rest] {method} {path} failed with HTTP {}", response.status);
            return Err(RestError::Http { status: response.status, body: response.body });
        }
        tracing::debug!("[rest] {method} {path} → HTTP {} ({} bytes)", response.status, response.body.len());
        Ok(response.body)
    }

    fn authorization(&self) -> String {
        let credentials = format!("{}:{}", self.config.auth_id, self.config.auth_token);
        format!("Basic {}", STANDARD.encode(credentials))
    }

    // ── API helpers ──────────────────────────────────────────────────────────

    /// Originate an outbound call.
    pub fn call<I, K, V>(&self, call_params: I) -> Result<Vec<u8>, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request("/v0.1/Call/", Method::Post, call_params)
    }

    /// Originate several calls in one request.
    pub fn bulk_call<I, K, V>(&self, call_params: I) -> Result<Vec<u8>, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request("/v0.1/BulkCalls/", Method::Post, call_params)
    }

    /// Point a live call at a new RESTXML URL.
    pub fn transfer_call<I, K, V>(&self, call_params: I) -> Result<Vec<u8>, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request("/v0.1/TransferCall/", Method::Post, call_params)
    }

    /// Hang up one live call.
    pub fn hangup_call<I, K, V>(&self, call_params: I) -> Result<Vec<u8>, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request("/v0.1/HangupCall/", Method::Post, call_params)
    }

    /// Hang up every live call.
    pub fn hangup_all_calls(&self) -> Result<Vec<u8>, RestError> {
        self.request("/v0.1/HangupAllCalls/", Method::Get, NO_VARS)
    }

    pub fn schedule_hangup<I, K, V>(&self, call_params: I) -> Result<Vec<u8>, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request("/v0.1/ScheduleHangup/", Method::Get, call_params)
    }

    pub fn cancel_scheduled_hangup<I, K, V>(&self, call_params: I) -> Result<Vec<u8>, RestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request("/v0.1/CancelScheduledHangup/", Method::Get, call_params)
    }
}

impl<T> fmt::Debug for RestClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient").field("config", &self.config).finish_non_exhaustive()
    }
}

// ─── helpers ──────────────────────────────────────────────────────────────────

fn form_encode<K: AsRef<str>, V: AsRef<str>>(vars: &[(K, V)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(vars)
        .finish()
}

/// Append an encoded query to `uri`, reusing an existing `?` if there is one
/// past the first character.
fn append_query(uri: &mut String, query: &str) {
    if uri.find('?').is_some_and(|i| i > 0) {
        if !uri.ends_with('&') {
            uri.push('&');
        }
    } else {
        uri.push('?');
    }
    uri.push_str(query);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_goes_after_question_mark() {
        let mut uri = String::from("http://x/a");
        append_query(&mut uri, "b=1");
        assert_eq!(uri, "http://x/a?b=1");
    }

    #[test]
    fn existing_query_is_extended() {
        let mut uri = String::from("http://x/a?c=2");
        append_query(&mut uri, "b=1");
        assert_eq!(uri, "http://x/a?c=2&b=1");

        let mut uri = String::from("http://x/a?c=2&");
        append_query(&mut uri, "b=1");
        assert_eq!(uri, "http://x/a?c=2&b=1");
    }

    #[test]
    fn form_encoding_uses_plus_for_spaces() {
        assert_eq!(form_encode(&[("Text", "hello world"), ("To", "+1 555")]), "Text=hello+world&To=%2B1+555");
    }

    #[test]
    fn config_debug_redacts_token() {
        let c = Config { auth_token: "hunter2".into(), ..Default::default() };
        assert!(!format!("{c:?}").contains("hunter2"));
    }
}
