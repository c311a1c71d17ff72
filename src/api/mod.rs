//! Transport to the clinical backend.
//!
//! `ClinicApi` is the only seam between the console and the network: the
//! server binary plugs in [`HttpClinicApi`], tests plug in a scripted fake.
//! Everything above it speaks in typed payloads through [`admin`].

pub mod admin;
pub mod envelope;
pub mod http;

use std::fmt;
use std::future::Future;

use serde_json::Value;

pub use http::HttpClinicApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

/// One outgoing request. `path` is relative to the backend base URL and
/// already carries any query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        ApiRequest { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        ApiRequest { method: Method::Post, path: path.into(), body }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        ApiRequest { method: Method::Delete, path: path.into(), body: None }
    }
}

/// Raw HTTP outcome: status code and undecoded body text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        ApiResponse { status, body: body.into() }
    }

    pub fn ok_json(body: &Value) -> Self {
        ApiResponse { status: 200, body: body.to_string() }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, reset, DNS, ... anything before a body arrived.
    Transport(String),
    /// Body was not JSON, or JSON without the expected payload fields.
    Decode(String),
    /// Envelope arrived but `status` was not `"success"`.
    Rejected { status: String, message: Option<String> },
    /// Request could not be assembled (query encoding).
    Encode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Transport error: {e}"),
            ApiError::Decode(e) => write!(f, "Decode error: {e}"),
            ApiError::Rejected { status, message: Some(m) } => {
                write!(f, "Backend rejected request ({status}): {m}")
            }
            ApiError::Rejected { status, message: None } => {
                write!(f, "Backend rejected request ({status})")
            }
            ApiError::Encode(e) => write!(f, "Encode error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for ApiError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        ApiError::Encode(e.to_string())
    }
}

/// JSON-over-HTTP transport to the clinical backend.
pub trait ClinicApi {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}
