//! Pluggable transport layer.
//!
//! Implement [`Transport`] over any HTTP client to get request building,
//! authentication and status handling from [`crate::RestClient`] for free.

use std::fmt;
use std::str::FromStr;

use crate::errors::RestError;

// ─── Method ───────────────────────────────────────────────────────────────────

/// HTTP verbs the REST API accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    #[default]
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get    => "GET",
            Self::Post   => "POST",
            Self::Put    => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = RestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET"    => Ok(Self::Get),
            "POST"   => Ok(Self::Post),
            "PUT"    => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other    => Err(RestError::UnsupportedMethod(other.to_owned())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Request / response ───────────────────────────────────────────────────────

/// A fully built, authenticated request ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method:  Method,
    pub url:     String,
    pub headers: Vec<(String, String)>,
    /// Form-encoded body; `None` for GET.
    pub body:    Option<String>,
}

impl HttpRequest {
    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What a transport hands back: the status line's code and the raw body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body:   Vec<u8>,
}

// ─── Transport ────────────────────────────────────────────────────────────────

/// Sends one HTTP request and returns the response.
///
/// Implementations own their connection state; non-2xx statuses must be
/// returned as responses, not errors, so the client can report them.
pub trait Transport {
    /// The error type returned when no response could be obtained.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform `request` and wait for the full response.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_round_trips_wire_names() {
        for m in [Method::Get, Method::Post, Method::Put, Method::Delete] {
            assert_eq!(m.as_str().parse::<Method>().unwrap(), m);
        }
        assert_eq!(Method::default(), Method::Post);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = "PATCH".parse::<Method>().unwrap_err();
        assert_eq!(err.to_string(), "HTTP PATCH method not implemented");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method:  Method::Get,
            url:     "http://x".into(),
            headers: vec![("Authorization".into(), "Basic abc".into())],
            body:    None,
        };
        assert_eq!(req.header("authorization"), Some("Basic abc"));
        assert_eq!(req.header("Content-Type"), None);
    }
}
