//! HTTP transport for talking to a MediaHub server.
//!
//! The parser and dispatcher never perform network I/O themselves; this
//! module is the collaborator that produces [`Response`] snapshots for them.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::Result;

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("mediahub-client/", env!("CARGO_PKG_VERSION"));

/// HTTP timeout in seconds.
const HTTP_TIMEOUT_SECS: u64 = 30;

/// An owned snapshot of an HTTP response.
///
/// `content` is the raw body; `text` is its lossy UTF-8 decoding, kept for
/// diagnostic snippets when the body fails to parse.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status_code: u16,
    /// Raw response body.
    pub content: Vec<u8>,
    /// Lossy UTF-8 decoding of the body.
    pub text: String,
    /// Final URL the response was served from.
    pub url: String,
}

impl Response {
    /// Build a response snapshot, deriving `text` from the body.
    #[must_use]
    pub fn new(status_code: u16, content: Vec<u8>, url: impl Into<String>) -> Self {
        let text = String::from_utf8_lossy(&content).into_owned();
        Self {
            status_code,
            content,
            text,
            url: url.into(),
        }
    }

    /// True when the status code is in [200, 300).
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The path component of the response URL, or "/" when the URL does not
    /// parse.
    #[must_use]
    pub fn path(&self) -> String {
        Url::parse(&self.url)
            .map(|u| u.path().to_string())
            .unwrap_or_else(|_| "/".to_string())
    }
}

/// Blocking HTTP client bound to a server base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a client for the given server base URL.
    ///
    /// The underlying client is configured with a request timeout and a
    /// versioned user agent.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        let base_url = Url::parse(base_url)?;

        Ok(Self { http, base_url })
    }

    /// The server base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET an API path and snapshot the response.
    pub fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let response = self.http.get(url).send()?;
        Self::snapshot(response)
    }

    /// PUT to an API path with the given query parameters.
    pub fn put(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let response = self.http.put(url).query(query).send()?;
        Self::snapshot(response)
    }

    fn snapshot(response: reqwest::blocking::Response) -> Result<Response> {
        let status_code = response.status().as_u16();
        let url = response.url().to_string();
        let content = response.bytes()?.to_vec();

        Ok(Response::new(status_code, content, url))
    }
}
