//! Fetch gateway: request descriptors, error taxonomy and envelope
//! normalization.
//!
//! # Responsibility
//! - Wrap a single network attempt behind the [`Gateway`] trait.
//! - Normalize the backend's inconsistent response envelopes per endpoint.
//!
//! # Invariants
//! - One attempt per call: no retries, no timeouts, no caching.
//! - Transport and parse failures map to `FetchError::Network`; responses
//!   whose application-level status signals failure map to
//!   `FetchError::Application`.

use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod endpoints;
mod http;

pub use http::HttpGateway;

/// Result type for gateway APIs.
pub type GatewayResult<T> = Result<T, FetchError>;

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully-formed request descriptor handed to a [`Gateway`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, Method::Get)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path, Method::Post)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(path, Method::Put)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path, Method::Delete)
    }

    fn new(path: impl Into<String>, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Error taxonomy for remote calls.
///
/// Backend validation failures are not distinguishable from other
/// application-level failures on the wire, so both surface as
/// `Application` with the backend's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or a response body that is not valid JSON.
    Network(String),
    /// The API responded but signaled failure with a message.
    Application { message: String },
    /// No session identity is available for a screen that requires one.
    AuthRequired,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(details) => write!(f, "network failure: {details}"),
            Self::Application { message } => write!(f, "{message}"),
            Self::AuthRequired => write!(f, "please log in to continue"),
        }
    }
}

impl Error for FetchError {}

/// Single-attempt network boundary.
///
/// Implemented over HTTP by [`HttpGateway`]; tests drive the same seam with
/// scripted in-memory gateways.
pub trait Gateway {
    fn call(&self, request: &ApiRequest) -> GatewayResult<Value>;
}

impl<G: Gateway + ?Sized> Gateway for &G {
    fn call(&self, request: &ApiRequest) -> GatewayResult<Value> {
        (**self).call(request)
    }
}

/// Response envelope shape of one backend route.
///
/// The backend is inconsistent: some routes wrap payloads as
/// `{"status": "success", <key>: ...}`, others return the payload bare, and
/// mutation routes return status-plus-message acknowledgements. Each
/// endpoint builder declares the shape its route actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{"status": "success", <payload_key>: <payload>}`.
    StatusWrapped { payload_key: &'static str },
    /// The payload is the whole response body.
    Bare,
    /// Status-plus-message acknowledgement with no payload of interest.
    Acknowledged,
}

/// A request descriptor paired with its route's envelope shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub request: ApiRequest,
    pub envelope: Envelope,
}

/// Issues one call and normalizes the response to its payload.
///
/// For `StatusWrapped` routes a missing payload key yields `Value::Null`
/// (the backend omits empty collections); callers decode null as empty.
pub fn execute<G: Gateway>(gateway: &G, prepared: &PreparedRequest) -> GatewayResult<Value> {
    let raw = gateway.call(&prepared.request)?;
    normalize(raw, prepared.envelope)
}

fn normalize(value: Value, envelope: Envelope) -> GatewayResult<Value> {
    match envelope {
        Envelope::Bare => Ok(value),
        Envelope::StatusWrapped { payload_key } => {
            check_status(&value)?;
            Ok(value.get(payload_key).cloned().unwrap_or(Value::Null))
        }
        Envelope::Acknowledged => {
            check_status(&value)?;
            Ok(value)
        }
    }
}

fn check_status(value: &Value) -> GatewayResult<()> {
    match value.get("status").and_then(Value::as_str) {
        Some("success") => Ok(()),
        Some(_) => Err(FetchError::Application {
            message: application_message(value),
        }),
        None => Err(FetchError::Network(
            "response is missing the status field".to_string(),
        )),
    }
}

/// Best-effort human-readable message from an error response body.
pub(crate) fn application_message(value: &Value) -> String {
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "request failed".to_string())
}
