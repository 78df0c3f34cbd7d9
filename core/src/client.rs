//! HTTP client for the employee server.
//!
//! # Design
//! `DirectoryClient` holds a `base_url` and a `Transport`, nothing else.
//! Each verb is split into a `build_*` method producing an `HttpRequest` and
//! a `parse_*` method consuming an `HttpResponse`; `get`, `post` and
//! `delete` run one round trip through the transport in between. Every
//! successful payload arrives wrapped in an `Envelope` whose `data` field is
//! the actual result.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DirectoryError, DirectoryResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::Envelope;

/// Client for the employee server's envelope-wrapped JSON API.
#[derive(Clone)]
pub struct DirectoryClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl<T: Transport> DirectoryClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `path` and decode the envelope's `data` into `D`.
    pub fn get<D: DeserializeOwned>(&self, path: &str) -> DirectoryResult<D> {
        let response = self.send(self.build_get(path))?;
        parse_data(response)
    }

    /// POST `body` as JSON to `path` and decode the envelope's `data` into `D`.
    pub fn post<B: Serialize, D: DeserializeOwned>(&self, path: &str, body: &B) -> DirectoryResult<D> {
        let response = self.send(self.build_post(path, body)?)?;
        parse_data(response)
    }

    /// DELETE `path` with `body` as JSON; returns the envelope's boolean `data`.
    pub fn delete<B: Serialize>(&self, path: &str, body: &B) -> DirectoryResult<bool> {
        let response = self.send(self.build_delete(path, body)?)?;
        parse_deleted(response)
    }

    pub fn build_get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(path),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_post<B: Serialize>(&self, path: &str, body: &B) -> DirectoryResult<HttpRequest> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url(path),
            headers: json_headers(),
            body: Some(to_json(body)?),
        })
    }

    pub fn build_delete<B: Serialize>(&self, path: &str, body: &B) -> DirectoryResult<HttpRequest> {
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: self.url(path),
            headers: json_headers(),
            body: Some(to_json(body)?),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send(&self, request: HttpRequest) -> DirectoryResult<HttpResponse> {
        debug!(method = ?request.method, url = %request.path, "sending upstream request");
        let response = self.transport.execute(request)?;
        if !response.is_success() {
            warn!(status = response.status, "upstream request failed");
        }
        Ok(response)
    }
}

/// Check the status and decode the envelope's `data` into `D`.
pub fn parse_data<D: DeserializeOwned>(response: HttpResponse) -> DirectoryResult<D> {
    check_status(&response)?;
    let envelope: Envelope<D> =
        serde_json::from_str(&response.body).map_err(|e| DirectoryError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

/// Check the status and decode the envelope's boolean `data`.
pub fn parse_deleted(response: HttpResponse) -> DirectoryResult<bool> {
    parse_data(response)
}

/// Map any non-2xx status to `DirectoryError::Upstream`, body kept verbatim.
fn check_status(response: &HttpResponse) -> DirectoryResult<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(DirectoryError::Upstream {
        status: response.status,
        body: response.body.clone(),
    })
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<B: Serialize>(body: &B) -> DirectoryResult<String> {
    serde_json::to_string(body).map_err(|e| DirectoryError::Serialization(e.to_string()))
}
