//! The I/O seam between `DirectoryClient` and the network.
//!
//! `UreqTransport` disables ureq's status-code-as-error behavior so 4xx/5xx
//! answers come back as data and the client decides what they mean.

use crate::error::{DirectoryError, DirectoryResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one `HttpRequest` and returns the matching `HttpResponse`.
///
/// Implementations must return `Ok` for every response the server produced,
/// whatever its status; `Err` is reserved for failures of the round trip.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> DirectoryResult<HttpResponse>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// The agent keeps its connection pool behind an `Arc`, so clones are cheap
/// and can be used from several threads at once.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> DirectoryResult<HttpResponse> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let result = match (method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&path), &headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&path), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&path), &headers).send_empty(),
            // ureq only sends a DELETE body when asked to explicitly.
            (HttpMethod::Delete, Some(body)) => {
                with_headers(self.agent.delete(&path).force_send_body(), &headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Delete, None) => with_headers(self.agent.delete(&path), &headers).call(),
        };

        let mut response = result.map_err(|e| DirectoryError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
