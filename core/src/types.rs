//! Domain DTOs for the employee directory.
//!
//! # Design
//! The employee server names its fields `employee_name`, `employee_salary`
//! and so on. `Employee` accepts those as aliases on the way in and writes
//! the short names on the way out, so the rest of the crate (and whatever
//! serves it outward) sees one stable shape. The mock-server crate defines
//! its own copies of these types; integration tests catch schema drift.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single employee record as returned by the employee server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: Uuid,
    #[serde(alias = "employee_name")]
    pub name: String,
    #[serde(alias = "employee_salary")]
    pub salary: u32,
    #[serde(alias = "employee_age")]
    pub age: u32,
    #[serde(alias = "employee_title")]
    pub title: String,
    #[serde(alias = "employee_email")]
    pub email: String,
}

/// Request payload for creating a new employee. The id is server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeCreationInput {
    pub name: String,
    pub salary: u32,
    pub age: u32,
    pub title: String,
    pub email: String,
}

/// Request payload for the delete endpoint, which keys on name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteEmployeeInput {
    pub name: String,
}

/// The `{ "data": ..., "status": ... }` wrapper around every upstream payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub status: Option<String>,
}
