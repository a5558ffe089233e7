use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use backend::api::router;
use backend::catalog::Catalog;
use backend::config::SiteConfig;
use backend::error::AppError;
use backend::geo::NoopGeoClient;
use backend::intake::{IntakeClient, LeadPayload, LeadType};
use backend::state::AppState;

/// Captures every forwarded lead for assertions.
#[derive(Default)]
struct RecordingIntakeClient {
    submissions: Mutex<Vec<LeadPayload>>,
}

#[async_trait]
impl IntakeClient for RecordingIntakeClient {
    async fn submit(&self, payload: &LeadPayload) -> Result<(), AppError> {
        self.submissions.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

struct FailingIntakeClient;

#[async_trait]
impl IntakeClient for FailingIntakeClient {
    async fn submit(&self, _payload: &LeadPayload) -> Result<(), AppError> {
        Err(AppError::InternalServerError)
    }
}

fn app_with_intake(intake: Arc<dyn IntakeClient>) -> Router {
    router(AppState {
        catalog: Arc::new(Catalog::seed()),
        config: Arc::new(SiteConfig::default()),
        intake,
        geo: Arc::new(NoopGeoClient),
    })
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

fn register_request() -> Value {
    json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "age": "15",
        "grade": "10th",
        "school": "Delhi Public School",
        "course_slug": "teen-ai-builders",
        "batch": "Batch 1",
        "notes": "A quiz bot for my school"
    })
}

#[tokio::test]
async fn test_register_lead_forwards_and_links_to_whatsapp() {
    let intake = Arc::new(RecordingIntakeClient::default());
    let app = app_with_intake(intake.clone());

    let (status, body) = post_json(app, "/api/leads/register", register_request()).await;
    assert_eq!(status, StatusCode::OK);

    let url = body["whatsapp_url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/919108030542?text="));
    assert!(url.contains("Teen+AI+Builders") || url.contains("Teen%20AI%20Builders"));

    let submissions = intake.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    let lead = &submissions[0];
    assert_eq!(lead.lead_type, LeadType::Registration);
    assert_eq!(lead.course, "Teen AI Builders");
    assert_eq!(lead.batch.as_deref(), Some("Batch 1"));
    assert_eq!(
        body["lead_id"].as_str().unwrap(),
        lead.lead_id.to_string()
    );
}

fn engineering_register_request() -> Value {
    json!({
        "name": "Meera Iyer",
        "email": "meera@example.com",
        "role": "Backend Engineer",
        "python": "Daily at work",
        "course_slug": "ai-engineering-agentic-foundations",
        "batch": "Next Batch",
        "notes": "Interested in agent frameworks"
    })
}

#[tokio::test]
async fn test_engineering_registration_forwards_role_and_python() {
    let intake = Arc::new(RecordingIntakeClient::default());
    let app = app_with_intake(intake.clone());

    let (status, body) =
        post_json(app, "/api/leads/register", engineering_register_request()).await;
    assert_eq!(status, StatusCode::OK);

    let url = body["whatsapp_url"].as_str().unwrap();
    assert!(url.contains("Current+Role") || url.contains("Current%20Role"));
    assert!(url.contains("Python+Experience") || url.contains("Python%20Experience"));

    let submissions = intake.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    let lead = &submissions[0];
    assert_eq!(lead.lead_type, LeadType::Registration);
    assert_eq!(lead.course, "AI Engineering & Agentic Foundations");
    assert_eq!(lead.role.as_deref(), Some("Backend Engineer"));
    assert_eq!(lead.python.as_deref(), Some("Daily at work"));
    assert!(lead.age.is_none());
    assert!(lead.school.is_none());
}

#[tokio::test]
async fn test_register_rejects_unrecognized_details_shape() {
    let app = app_with_intake(Arc::new(RecordingIntakeClient::default()));
    // Neither the schooling fields nor role/python are present.
    let (status, _) = post_json(
        app,
        "/api/leads/register",
        json!({
            "name": "Meera Iyer",
            "email": "meera@example.com",
            "course_slug": "ai-engineering-agentic-foundations"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_rejects_pre_register_course() {
    let app = app_with_intake(Arc::new(RecordingIntakeClient::default()));
    let mut req = register_request();
    req["course_slug"] = json!("ai-product-builder");

    let (status, body) = post_json(app, "/api/leads/register", req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("not open for enrollment"));
}

#[tokio::test]
async fn test_register_rejects_unknown_course() {
    let app = app_with_intake(Arc::new(RecordingIntakeClient::default()));
    let mut req = register_request();
    req["course_slug"] = json!("no-such-course");

    let (status, _) = post_json(app, "/api/leads/register", req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_validates_name_and_email() {
    let app = app_with_intake(Arc::new(RecordingIntakeClient::default()));
    let mut req = register_request();
    req["name"] = json!("A");
    let (status, _) = post_json(app, "/api/leads/register", req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let app = app_with_intake(Arc::new(RecordingIntakeClient::default()));
    let mut req = register_request();
    req["email"] = json!("not-an-email");
    let (status, _) = post_json(app, "/api/leads/register", req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// The site shows the confirmation state even when the sheet save fails;
// the backend mirrors that by treating intake errors as non-fatal.
#[tokio::test]
async fn test_register_succeeds_when_intake_fails() {
    let app = app_with_intake(Arc::new(FailingIntakeClient));
    let (status, body) = post_json(app, "/api/leads/register", register_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["whatsapp_url"].is_string());
}

#[tokio::test]
async fn test_pre_register_lead() {
    let intake = Arc::new(RecordingIntakeClient::default());
    let app = app_with_intake(intake.clone());

    let (status, body) = post_json(
        app,
        "/api/leads/pre-register",
        json!({
            "name": "Ravi Kumar",
            "email": "ravi@example.com",
            "course_slug": "executive-ai-strategy",
            "background": "working-professional",
            "notes": "Interested in governance"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("on the list"));
    assert!(body.get("whatsapp_url").is_none());

    let submissions = intake.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].lead_type, LeadType::PreRegistration);
    assert_eq!(submissions[0].course, "Executive AI Strategy");
    assert_eq!(
        submissions[0].background.as_deref(),
        Some("working-professional")
    );
}

#[tokio::test]
async fn test_pre_register_rejects_live_course() {
    let app = app_with_intake(Arc::new(RecordingIntakeClient::default()));
    let (status, body) = post_json(
        app,
        "/api/leads/pre-register",
        json!({
            "name": "Ravi Kumar",
            "email": "ravi@example.com",
            "course_slug": "teen-ai-builders",
            "background": "teen"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("already open"));
}

#[tokio::test]
async fn test_pre_register_requires_background() {
    let app = app_with_intake(Arc::new(RecordingIntakeClient::default()));
    let (status, _) = post_json(
        app,
        "/api/leads/pre-register",
        json!({
            "name": "Ravi Kumar",
            "email": "ravi@example.com",
            "course_slug": "executive-ai-strategy",
            "background": "  "
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
