//! HTTP transport to the policy backend.
//!
//! `Transport` is the seam between the session logic and the network: it sends
//! a request and hands back a `RawResponse`, or a `PolicyError::Connection` when
//! no response could be obtained. Any status code, including errors, is a
//! successful transport call; interpreting it is the caller's job.
use std::time::Duration;

use log::{debug, error, info};
use policy_common::net::endpoint;
use policy_common::{PolicyError, RawResponse, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;

/// Blocking request/response exchange with the backend.
pub trait Transport: Send + Sync {
    /// `POST <path>` with a JSON `body`.
    fn post_json(&self, path: &str, body: String) -> Result<RawResponse>;

    /// `GET <path>` with `authorization` sent verbatim as the `Authorization` header.
    fn get_authorized(&self, path: &str, authorization: &str) -> Result<RawResponse>;
}

/// `Transport` backed by a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport for `base_url`.
    ///
    /// With `timeout` unset a request waits for the backend indefinitely.
    /// Redirects are not followed: a 3xx is returned to the caller like any
    /// other non-200 status.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| PolicyError::Format(format!("Failed to build HTTP client: {}", e)))?;
        info!(
            "HTTP transport ready for {} (timeout: {:?})",
            base_url, timeout
        );
        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an already configured reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Base origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn execute(&self, request: RequestBuilder, url: &str) -> Result<RawResponse> {
        let response = request.send().map_err(|e| {
            error!("Failed to send request to {}: {}", url, e);
            PolicyError::Connection(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            error!("Failed to read response body from {}: {}", url, e);
            PolicyError::Connection(e.to_string())
        })?;
        debug!("{} answered {} ({} bytes)", url, status, body.len());
        Ok(RawResponse::new(status, body))
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: String) -> Result<RawResponse> {
        let url = endpoint(&self.base_url, path);
        debug!("POST {}", url);
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.execute(request, &url)
    }

    fn get_authorized(&self, path: &str, authorization: &str) -> Result<RawResponse> {
        let url = endpoint(&self.base_url, path);
        debug!("GET {}", url);
        let request = self.client.get(&url).header(AUTHORIZATION, authorization);
        self.execute(request, &url)
    }
}
