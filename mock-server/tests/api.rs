use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, app_with, Employee, Envelope, SUCCESS_STATUS};
use tower::ServiceExt;
use uuid::Uuid;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

/// Clones share the router's state, so each call sees earlier writes.
async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

fn employee(name: &str, salary: u32) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: name.to_string(),
        salary,
        age: 22,
        title: "Software Engineer".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
    }
}

// --- list ---

#[tokio::test]
async fn list_employees_empty() {
    let resp = send(&app(), get_request("/api/v1/employee")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope<Vec<Employee>> = body_json(resp).await;
    assert!(envelope.data.is_empty());
    assert_eq!(envelope.status, SUCCESS_STATUS);
}

#[tokio::test]
async fn list_employees_keeps_insertion_order() {
    let seeded = vec![employee("John Doe", 1000), employee("Jake Luther", 2000)];
    let resp = send(&app_with(seeded.clone()), get_request("/api/v1/employee")).await;

    let envelope: Envelope<Vec<Employee>> = body_json(resp).await;
    assert_eq!(envelope.data, seeded);
}

// --- create ---

#[tokio::test]
async fn create_employee_assigns_id() {
    let resp = send(
        &app(),
        json_request(
            "POST",
            "/api/v1/employee",
            r#"{"name":"John Clair","salary":1000,"age":30,"title":"CTO","email":"john@rq.com"}"#,
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope<Employee> = body_json(resp).await;
    assert_ne!(envelope.data.id, Uuid::nil());
    assert_eq!(envelope.data.name, "John Clair");
    assert_eq!(envelope.data.title, "CTO");
}

#[tokio::test]
async fn create_employee_malformed_json_returns_422() {
    let resp = send(
        &app(),
        json_request("POST", "/api/v1/employee", r#"{"not_name":1}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_employee_not_found_has_plain_text_body() {
    let resp = send(
        &app(),
        get_request("/api/v1/employee/00000000-0000-0000-0000-000000000000"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert_eq!(
        &body[..],
        b"Employee not found with ID 00000000-0000-0000-0000-000000000000"
    );
}

#[tokio::test]
async fn get_employee_bad_uuid_returns_400() {
    let resp = send(&app(), get_request("/api/v1/employee/not-a-uuid")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_unknown_name_reports_false() {
    let resp = send(
        &app(),
        json_request("DELETE", "/api/v1/employee", r#"{"name":"Nobody"}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope<bool> = body_json(resp).await;
    assert!(!envelope.data);
}

// --- full lifecycle ---

#[tokio::test]
async fn create_get_delete_lifecycle() {
    let app = app_with(vec![employee("Will Jacks", 500)]);

    // create
    let resp = send(
        &app,
        json_request(
            "POST",
            "/api/v1/employee",
            r#"{"name":"John Doe","salary":1000,"age":22,"title":"Engineer","email":"john@gmail.com"}"#,
        ),
    )
    .await;
    let created: Envelope<Employee> = body_json(resp).await;
    let id = created.data.id;

    // list — seeded record first, new one appended
    let resp = send(&app, get_request("/api/v1/employee")).await;
    let listed: Envelope<Vec<Employee>> = body_json(resp).await;
    assert_eq!(listed.data.len(), 2);
    assert_eq!(listed.data[0].name, "Will Jacks");
    assert_eq!(listed.data[1].id, id);

    // get
    let resp = send(&app, get_request(&format!("/api/v1/employee/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Envelope<Employee> = body_json(resp).await;
    assert_eq!(fetched.data, created.data);

    // delete by name
    let resp = send(
        &app,
        json_request("DELETE", "/api/v1/employee", r#"{"name":"John Doe"}"#),
    )
    .await;
    let deleted: Envelope<bool> = body_json(resp).await;
    assert!(deleted.data);

    // get after delete — 404
    let resp = send(&app, get_request(&format!("/api/v1/employee/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — only the seeded record remains
    let resp = send(&app, get_request("/api/v1/employee")).await;
    let listed: Envelope<Vec<Employee>> = body_json(resp).await;
    assert_eq!(listed.data.len(), 1);
    assert_eq!(listed.data[0].name, "Will Jacks");
}
