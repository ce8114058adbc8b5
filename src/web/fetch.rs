//! Browser transport over `gloo-net` (the Fetch API).

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use web_sys::RequestCredentials;

use crate::request::{Credentials, HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

fn credentials_mode(credentials: Credentials) -> RequestCredentials {
    match credentials {
        Credentials::Omit => RequestCredentials::Omit,
        Credentials::SameOrigin => RequestCredentials::SameOrigin,
        Credentials::Include => RequestCredentials::Include,
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| TransportError::new(format!("invalid method {}: {e}", request.method)))?;

        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .credentials(credentials_mode(request.credentials));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::new(e.to_string()))?;

        let response = prepared.send().await.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
