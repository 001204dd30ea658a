//! Integration tests for the tutor HTTP endpoints.
//!
//! Exercises the router with `tower::ServiceExt::oneshot`, backed by the
//! in-memory retriever and the mock generator.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use security_mentor::adapters::ai::MockGenerator;
use security_mentor::adapters::http::{tutor_routes, TutorHandlers};
use security_mentor::adapters::retrieval::InMemoryRetriever;
use security_mentor::application::handlers::{
    DispatchHandler, ListModulesForRoleHandler, OnboardHandler, SelectModuleHandler,
};
use security_mentor::domain::curriculum::CurriculumStore;
use security_mentor::domain::roles::RoleProfileRegistry;

fn app() -> Router {
    let curriculum = Arc::new(CurriculumStore::builtin());
    let registry = Arc::new(RoleProfileRegistry::builtin());
    let retriever = Arc::new(InMemoryRetriever::new(
        vec!["All incidents must be reported to the ICT Helpdesk.".to_string()],
        5,
    ));
    let generator = Arc::new(MockGenerator::new());

    tutor_routes(TutorHandlers::new(
        Arc::new(OnboardHandler::new(registry)),
        Arc::new(SelectModuleHandler::new(curriculum.clone())),
        Arc::new(ListModulesForRoleHandler::new(curriculum.clone())),
        Arc::new(DispatchHandler::new(curriculum, retriever, generator)),
    ))
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_session(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post(
            "/sessions",
            json!({"name": "Amy", "role": "Administration Officer"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    body["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_session_returns_welcome_profile_and_plan() {
    let app = app();
    let response = app
        .oneshot(post(
            "/sessions",
            json!({"name": "Amy", "role": "Administration Officer"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert!(body["welcome"].as_str().unwrap().contains("Hello Amy!"));
    assert_eq!(body["profile"]["risk_level"], "standard");
    let plan = body["training_plan"].as_array().unwrap();
    assert_eq!(plan[0]["module_id"], "Module 1");
    assert_eq!(plan[0]["priority"], "mandatory");
}

#[tokio::test]
async fn create_session_without_name_is_rejected() {
    let app = app();
    let response = app
        .oneshot(post("/sessions", json!({"name": "  ", "role": "IT Technician"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn custom_marker_without_text_is_rejected() {
    let app = app();
    let response = app
        .oneshot(post(
            "/sessions",
            json!({"name": "Sam", "role": "Other (Please specify)"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn message_to_unknown_session_is_not_found() {
    let app = app();
    let response = app
        .oneshot(post(
            "/sessions/00000000-0000-0000-0000-000000000000/messages",
            json!({"text": "continue"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn module_selection_and_messages_share_session_state() {
    let app = app();
    let session_id = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(post(
            &format!("/sessions/{}/module", session_id),
            json!({"module": "Module 3"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["active_module"], "Module 3");
    assert_eq!(body["step"], 0);

    // Continue advances the stored session, not a fresh copy.
    let response = app
        .clone()
        .oneshot(post(
            &format!("/sessions/{}/messages", session_id),
            json!({"text": "continue"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["step"], 1);
    assert!(body["response"].as_str().unwrap().contains("ICT Helpdesk"));
}

#[tokio::test]
async fn selecting_unknown_module_is_not_found() {
    let app = app();
    let session_id = create_session(&app).await;

    let response = app
        .oneshot(post(
            &format!("/sessions/{}/module", session_id),
            json!({"module": "Module 42"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["code"], "UNKNOWN_MODULE");
}

#[tokio::test]
async fn progress_endpoint_reports_mandatory_totals() {
    let app = app();
    let session_id = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/sessions/{}/progress", session_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["completed_mandatory"], 0);
    assert_eq!(body["total_mandatory"], 5);
    assert_eq!(body["completed_modules"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn modules_endpoint_lists_the_training_plan() {
    let app = app();
    let session_id = create_session(&app).await;

    let response = app
        .oneshot(get(&format!("/sessions/{}/modules", session_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let plan = body.as_array().unwrap();
    assert_eq!(plan.len(), 7); // 5 mandatory + 2 recommended
    assert!(plan.iter().any(|a| a["priority"] == "recommended"));
}
