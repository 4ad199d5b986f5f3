//! HTTP API integration tests
//!
//! Drives the full application router (API under /api, CORS, frontend
//! fallback) with `tower::ServiceExt::oneshot` against an in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use spr_config::SprConfig;
use spr_db::service::SprService;

fn config_without_frontend() -> SprConfig {
    let mut config = SprConfig::default();
    config.frontend.dir = "/nonexistent/spr-frontend".into();
    config
}

async fn test_app() -> Router {
    let svc = SprService::new_local(":memory:").await.unwrap();
    spr_server::build_app(Arc::new(svc), &config_without_frontend())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_student(app: &Router, roll_no: &str, name: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/students",
        Some(json!({ "roll_no": roll_no, "name": name, "dept": "CSE", "year": "3" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_student_is_listed_with_empty_children() {
    let app = test_app().await;
    let id = create_student(&app, "BT200", "X").await;

    let (status, body) = send(&app, Method::GET, "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": id,
            "roll_no": "BT200",
            "name": "X",
            "dept": "CSE",
            "year": "3",
            "email": null,
            "offers": [],
            "internships": []
        }])
    );
}

#[tokio::test]
async fn missing_student_is_404() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/students/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "student 999 not found");
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/students/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn student_without_name_is_400() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/students",
        Some(json!({ "roll_no": "BT1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "name is required");
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = test_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/students")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_roll_no_is_409() {
    let app = test_app().await;
    create_student(&app, "BT1", "A").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/students",
        Some(json!({ "roll_no": "BT1", "name": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let app = test_app().await;
    let id = create_student(&app, "BT1", "A").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/students/{id}"),
        Some(json!({ "email": "a@example.com", "dept": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@example.com");
    assert_eq!(body["dept"], Value::Null);
    assert_eq!(body["roll_no"], "BT1");
    assert_eq!(body["year"], "3");
}

#[tokio::test]
async fn deleting_student_cascades() {
    let app = test_app().await;
    let id = create_student(&app, "BT1", "A").await;
    send(
        &app,
        Method::POST,
        "/api/offers",
        Some(json!({ "student_id": id, "company": "Zomato" })),
    )
    .await;
    let (_, internship) = send(
        &app,
        Method::POST,
        "/api/internships",
        Some(json!({ "student_id": id, "company": "ABC Corp" })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/reports",
        Some(json!({ "internship_id": internship["id"], "title": "Week 1" })),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "deleted" }));

    let (_, offers) = send(&app, Method::GET, "/api/offers", None).await;
    let (_, internships) = send(&app, Method::GET, "/api/internships", None).await;
    assert_eq!(offers, json!([]));
    assert_eq!(internships, json!([]));

    let (status, _) = send(&app, Method::DELETE, &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Offers, internships, reports
// ---------------------------------------------------------------------------

#[tokio::test]
async fn offer_defaults_to_offered_today() {
    let app = test_app().await;
    let id = create_student(&app, "BT1", "A").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/offers",
        Some(json!({ "student_id": id, "company": "Zomato", "role": "SDE Intern" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "Offered");
    assert_eq!(body["date"], spr_core::dates::today().to_string());
    assert_eq!(body["student_id"], id);
}

#[tokio::test]
async fn offer_for_missing_student_is_404_and_not_persisted() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/offers",
        Some(json!({ "student_id": 42, "company": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "student 42 not found");

    let (_, offers) = send(&app, Method::GET, "/api/offers", None).await;
    assert_eq!(offers, json!([]));
}

#[tokio::test]
async fn offer_without_student_id_is_400() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::POST, "/api/offers", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "student_id is required");
}

#[tokio::test]
async fn offer_with_unknown_status_is_400() {
    let app = test_app().await;
    let id = create_student(&app, "BT1", "A").await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/offers",
        Some(json!({ "student_id": id, "status": "Pending" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn internship_end_date_update_leaves_start_and_status() {
    let app = test_app().await;
    let id = create_student(&app, "BT1", "A").await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/internships",
        Some(json!({ "student_id": id, "start_date": "2025-06-01" })),
    )
    .await;
    assert_eq!(created["status"], "Ongoing");
    assert_eq!(created["end_date"], Value::Null);
    assert_eq!(created["reports"], json!([]));

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/internships/{}", created["id"]),
        Some(json!({ "end_date": "2025-08-31" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["start_date"], "2025-06-01");
    assert_eq!(updated["end_date"], "2025-08-31");
    assert_eq!(updated["status"], "Ongoing");
}

#[tokio::test]
async fn reports_nest_under_internships() {
    let app = test_app().await;
    let id = create_student(&app, "BT1", "A").await;
    let (_, internship) = send(
        &app,
        Method::POST,
        "/api/internships",
        Some(json!({ "student_id": id })),
    )
    .await;

    let (status, report) = send(
        &app,
        Method::POST,
        "/api/reports",
        Some(json!({
            "internship_id": internship["id"],
            "date": "2025-06-07",
            "title": "Week 1",
            "content": "Onboarding"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(report["date"], "2025-06-07");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/reports/{}", report["id"]),
        Some(json!({ "evaluation": "Good" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Week 1");
    assert_eq!(updated["evaluation"], "Good");

    let (_, student) = send(&app, Method::GET, &format!("/api/students/{id}"), None).await;
    assert_eq!(student["internships"][0]["reports"][0], updated);
}

#[tokio::test]
async fn report_for_missing_internship_is_404() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/reports",
        Some(json!({ "internship_id": 7, "title": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "internship 7 not found");
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_counts_offers_by_status() {
    let app = test_app().await;
    let id = create_student(&app, "BT1", "A").await;
    for status in ["Offered", "Accepted", "Joined"] {
        send(
            &app,
            Method::POST,
            "/api/offers",
            Some(json!({ "student_id": id, "status": status })),
        )
        .await;
    }
    send(
        &app,
        Method::POST,
        "/api/internships",
        Some(json!({ "student_id": id })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/dashboard/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total_students": 1,
            "total_offers": 3,
            "accepted_offers": 1,
            "joined_offers": 1,
            "ongoing_internships": 1
        })
    );
}

// ---------------------------------------------------------------------------
// Routing, CORS and frontend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_api_path_is_json_404() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn wrong_method_on_known_path_is_405() {
    let app = test_app().await;
    let id = create_student(&app, "BT1", "A").await;
    let (status, offer) = send(
        &app,
        Method::POST,
        "/api/offers",
        Some(json!({ "student_id": id, "company": "Zomato" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/offers/{}", offer["id"]);
    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, Method::POST, "/api/dashboard/summary", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    // The offer is untouched.
    let (_, offers) = send(&app, Method::GET, "/api/offers", None).await;
    assert_eq!(offers.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = test_app().await;
    let request = Request::builder()
        .uri("/api/students")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn frontend_serves_files_and_falls_back_to_index() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>SPR</h1>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('spr');").unwrap();

    let mut config = SprConfig::default();
    config.frontend.dir = dir.path().to_path_buf();
    let svc = SprService::new_local(":memory:").await.unwrap();
    let app = spr_server::build_app(Arc::new(svc), &config);

    for (path, expected) in [
        ("/", "<h1>SPR</h1>"),
        ("/app.js", "console.log('spr');"),
        ("/students/3", "<h1>SPR</h1>"),
    ] {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), expected, "{path}");
    }

    let (status, _) = send(&app, Method::GET, "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
}
