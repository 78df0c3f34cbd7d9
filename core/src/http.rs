//! HTTP request and response types described as plain data.
//!
//! # Design
//! `DirectoryClient` builds `HttpRequest` values and parses `HttpResponse`
//! values; a `Transport` sits between the two and performs the actual I/O.
//! Keeping the round trip behind plain data lets unit tests replay canned
//! responses and inspect every request the client would have sent.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// `path` holds the absolute URL (base URL already joined).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
