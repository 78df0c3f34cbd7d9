//! Employee directory client core.
//!
//! # Overview
//! Exposes directory operations (list, search, lookup, salary aggregation,
//! create, delete) by delegating to a remote employee server over HTTP and
//! unwrapping its `{ "data": ..., "status": ... }` envelope into typed values.
//!
//! # Design
//! - `DirectoryService` composes at most two sequential upstream calls per
//!   operation and aggregates in memory.
//! - `DirectoryClient` splits each verb into `build_*` (produces an
//!   `HttpRequest`) and `parse_*` (consumes an `HttpResponse`); a `Transport`
//!   performs the round trip in between.
//! - `UreqTransport` is the blocking production transport.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod text;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::DirectoryClient;
pub use config::DirectoryConfig;
pub use error::{DirectoryError, DirectoryResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{DirectoryService, DEFAULT_TOP_EARNERS, EMPLOYEE_PATH};
pub use transport::{Transport, UreqTransport};
pub use types::{DeleteEmployeeInput, Employee, EmployeeCreationInput, Envelope};
