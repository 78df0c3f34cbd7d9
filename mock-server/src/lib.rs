use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

pub const SUCCESS_STATUS: &str = "Successfully processed request.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: u32,
    #[serde(rename = "employee_age")]
    pub age: u32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email")]
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub salary: u32,
    pub age: u32,
    pub title: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct DeleteEmployee {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub status: String,
}

impl<T> Envelope<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            data,
            status: SUCCESS_STATUS.to_string(),
        })
    }
}

/// Insertion-ordered so listings come back in a stable order.
pub type Db = Arc<RwLock<Vec<Employee>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(employees: Vec<Employee>) -> Router {
    let db: Db = Arc::new(RwLock::new(employees));
    Router::new()
        .route(
            "/api/v1/employee",
            get(list_employees).post(create_employee).delete(delete_employee),
        )
        .route("/api/v1/employee/{id}", get(get_employee))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, employees: Vec<Employee>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(employees)).await
}

async fn list_employees(State(db): State<Db>) -> Json<Envelope<Vec<Employee>>> {
    let employees = db.read().await;
    debug!(count = employees.len(), "listing employees");
    Envelope::ok(employees.clone())
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<CreateEmployee>,
) -> Json<Envelope<Employee>> {
    let employee = Employee {
        id: Uuid::new_v4(),
        name: input.name,
        salary: input.salary,
        age: input.age,
        title: input.title,
        email: input.email,
    };
    debug!(id = %employee.id, "creating employee");
    db.write().await.push(employee.clone());
    Envelope::ok(employee)
}

async fn get_employee(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<Employee>>, (StatusCode, String)> {
    let employees = db.read().await;
    employees
        .iter()
        .find(|employee| employee.id == id)
        .cloned()
        .map(Envelope::ok)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Employee not found with ID {id}")))
}

async fn delete_employee(
    State(db): State<Db>,
    Json(input): Json<DeleteEmployee>,
) -> Json<Envelope<bool>> {
    let mut employees = db.write().await;
    let position = employees.iter().position(|employee| employee.name == input.name);
    if let Some(index) = position {
        employees.remove(index);
    }
    debug!(name = %input.name, deleted = position.is_some(), "deleting employee");
    Envelope::ok(position.is_some())
}
