//! Native transport over `reqwest`.
//!
//! Relative URLs are resolved against a base URL. A cookie store stands in
//! for the browser's credential handling: cookies set by the server (the
//! session cookie in particular) are sent back on later requests.

#[cfg(test)]
#[path = "reqwest_transport_test.rs"]
mod reqwest_transport_test;

use async_trait::async_trait;

use super::error::TransportError;
use super::transport::{Credentials, HttpRequest, HttpResponse, Transport};

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::new(format!("HTTP client build failed: {e}")))?;
        Ok(Self { client, base_url: base_url.into().trim_end_matches('/').to_owned() })
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_owned()
        } else if url.starts_with('/') {
            format!("{}{url}", self.base_url)
        } else {
            format!("{}/{url}", self.base_url)
        }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| TransportError::new(format!("invalid method {}: {e}", request.method)))?;
        let url = self.resolve(&request.url);
        if request.credentials == Credentials::Omit {
            log::debug!("credentials omit requested for {url}; cookie store is shared");
        }

        let mut builder = self.client.request(method, &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
