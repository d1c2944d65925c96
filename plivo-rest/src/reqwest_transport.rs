//! Blocking HTTP backend built on `reqwest`.

use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// [`Transport`] backed by a [`reqwest::blocking::Client`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an already configured client (proxies, timeouts, TLS roots).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    type Error = reqwest::Error;

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        let method = match request.method {
            Method::Get    => reqwest::Method::GET,
            Method::Post   => reqwest::Method::POST,
            Method::Put    => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
