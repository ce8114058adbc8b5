//! JSON request wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page code talks to the portal API through [`RequestClient::request`]. The
//! client fixes the conventions every call shares: JSON content type,
//! cookie credentials, JSON bodies in both directions, and one error report
//! per failed call.
//!
//! ERROR HANDLING
//! ==============
//! A failed call is logged, shown as an error toast, and returned to the
//! caller. The toast is not a substitute for handling: the caller still gets
//! the `Err` and decides what to do with it. There is exactly one attempt per
//! call; timeouts are whatever the transport imposes.


pub mod error;
#[cfg(feature = "native")]
pub mod reqwest_transport;
pub mod transport;

use serde_json::Value;

use crate::consts::{CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE};
use crate::messages;
use crate::notify::{NotificationCenter, Severity};

pub use error::{RequestError, TransportError};
#[cfg(feature = "native")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{Credentials, HttpRequest, HttpResponse, Transport};

/// Per-call options. The default is a `GET` with no body and no extra headers.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: "GET".to_owned(), body: None, headers: Vec::new() }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Attach a JSON body. `Value::Null` is treated as no body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = if body.is_null() { None } else { Some(body) };
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Sends requests over `T` and reports failures to a [`NotificationCenter`].
pub struct RequestClient<T> {
    transport: T,
    notifier: NotificationCenter,
}

impl<T: Transport> RequestClient<T> {
    #[must_use]
    pub fn new(transport: T, notifier: NotificationCenter) -> Self {
        Self { transport, notifier }
    }

    /// Perform one JSON request.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] for a non-2xx status, a transport failure,
    /// an unserializable body, or a non-JSON success body. The same error has
    /// already been shown as an error toast when this returns.
    pub async fn request(&self, url: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let method = options.method.clone();
        let result = self.perform(url, options).await;
        if let Err(err) = &result {
            log::error!("request {method} {url} failed: {err}");
            self.notifier.show(messages::request_failed(&err.message()), Severity::Error);
        }
        result
    }

    /// `GET url`.
    ///
    /// # Errors
    ///
    /// See [`RequestClient::request`].
    pub async fn get(&self, url: &str) -> Result<Value, RequestError> {
        self.request(url, RequestOptions::new()).await
    }

    /// `POST url` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RequestClient::request`].
    pub async fn post(&self, url: &str, body: Value) -> Result<Value, RequestError> {
        self.request(url, RequestOptions::new().method("POST").json(body)).await
    }

    /// Send a prepared request without any reporting. Used by callers that
    /// handle failure themselves.
    ///
    /// # Errors
    ///
    /// Returns the transport's error when no response arrives.
    pub async fn send_raw(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.transport.send(request).await
    }

    async fn perform(&self, url: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let request = build_request(url, options)?;
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(failure_from_response(&response));
        }
        serde_json::from_str(&response.body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

/// Turn options into a wire request with the JSON conventions applied.
///
/// # Errors
///
/// Returns [`RequestError::Encode`] if the body cannot be serialized.
pub fn build_request(url: &str, options: RequestOptions) -> Result<HttpRequest, RequestError> {
    let body = options
        .body
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| RequestError::Encode(e.to_string()))?;

    Ok(HttpRequest {
        method: options.method,
        url: url.to_owned(),
        headers: merge_headers(options.headers),
        body,
        credentials: Credentials::Include,
    })
}

/// JSON content type first, then caller headers. A caller header replaces any
/// earlier header with the same name, compared without case.
#[must_use]
pub fn merge_headers(caller: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut merged = vec![(CONTENT_TYPE_HEADER.to_owned(), JSON_CONTENT_TYPE.to_owned())];
    for (name, value) in caller {
        merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        merged.push((name, value));
    }
    merged
}

/// Build the error for a non-2xx response.
///
/// The body is read as JSON; an unreadable body counts as `{}`. A string
/// `detail` is used verbatim, any other non-null `detail` is rendered as
/// compact JSON, and without one the message names the status.
#[must_use]
pub fn failure_from_response(response: &HttpResponse) -> RequestError {
    let detail = match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Object(mut fields)) => match fields.remove("detail") {
            Some(Value::String(text)) => Some(text),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        },
        _ => None,
    };
    let message = match &detail {
        Some(text) if !text.is_empty() => text.clone(),
        _ => messages::http_status_failed(response.status),
    };
    RequestError::Status { status: response.status, message, detail }
}
