use std::collections::BTreeMap;

use axum::Json;
use axum::extract::Path;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Router, extract::Query, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{MESSAGE_TEMPLATES, NEXT_BATCH, SITE_NAME};
use crate::error::AppError;
use crate::geo::currency_for_country;
use crate::intake::{LeadPayload, LeadType};
use crate::models::*;
use crate::recommend::{course_score, recommend_courses};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/courses", get(list_courses))
        .route("/api/courses/{slug}", get(get_course))
        .route("/api/courses/{slug}/batches", get(list_course_batches))
        .route("/api/batches", get(list_batches))
        .route("/api/journey", get(journey))
        .route("/api/trainers", get(list_trainers))
        .route("/api/site", get(site_info))
        .route("/api/pricing", get(pricing))
        .route("/api/geo/currency", get(detect_currency))
        .route("/api/recommend", post(recommend))
        .route("/api/leads/register", post(register_lead))
        .route("/api/leads/pre-register", post(pre_register_lead))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[derive(Deserialize)]
struct CourseQueryParams {
    status: Option<CourseStatus>,
    stage: Option<Stage>,
    audience: Option<Audience>,
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Json<Vec<Course>> {
    let courses = state
        .catalog
        .courses()
        .iter()
        .filter(|c| params.status.is_none_or(|s| c.status == s))
        .filter(|c| params.stage.is_none_or(|s| c.stage == Some(s)))
        .filter(|c| params.audience.is_none_or(|a| c.audiences.contains(&a)))
        .cloned()
        .collect();
    Json(courses)
}

async fn get_course(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Course>, AppError> {
    let course = state
        .catalog
        .course_by_slug(&slug)
        .ok_or(AppError::NotFound)?;
    Ok(Json(course.clone()))
}

async fn list_course_batches(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Batch>>, AppError> {
    if state.catalog.course_by_slug(&slug).is_none() {
        return Err(AppError::NotFound);
    }
    let batches = state
        .catalog
        .batches_for_course(&slug)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(batches))
}

async fn list_batches(State(state): State<AppState>) -> Json<Vec<Batch>> {
    Json(state.catalog.batches().to_vec())
}

#[derive(Debug, Serialize)]
struct JourneyStep {
    stage: Stage,
    number: u8,
    label: &'static str,
    course: Course,
}

/// The five-step learning journey: staged courses in stage order.
async fn journey(State(state): State<AppState>) -> Json<Vec<JourneyStep>> {
    let steps = state
        .catalog
        .journey_courses()
        .into_iter()
        .filter_map(|course| {
            course.stage.map(|stage| JourneyStep {
                stage,
                number: stage.number(),
                label: stage.label(),
                course: course.clone(),
            })
        })
        .collect();
    Json(steps)
}

async fn list_trainers(State(state): State<AppState>) -> Json<Vec<Trainer>> {
    Json(state.catalog.trainers().to_vec())
}

#[derive(Debug, Serialize)]
struct SiteInfo {
    name: &'static str,
    next_batch: &'static str,
    whatsapp_number: String,
    /// Ready-to-open deep links for each canned conversation opener.
    whatsapp_links: BTreeMap<&'static str, String>,
}

async fn site_info(State(state): State<AppState>) -> Json<SiteInfo> {
    let whatsapp_links = MESSAGE_TEMPLATES
        .iter()
        .map(|&(key, message)| (key, state.config.whatsapp_link(message)))
        .collect();
    Json(SiteInfo {
        name: SITE_NAME,
        next_batch: NEXT_BATCH,
        whatsapp_number: state.config.whatsapp_number.clone(),
        whatsapp_links,
    })
}

#[derive(Deserialize)]
struct PricingQueryParams {
    currency: Option<Currency>,
}

#[derive(Debug, Serialize)]
struct PriceRow {
    course_slug: String,
    price: String,
}

#[derive(Debug, Serialize)]
struct PricingResponse {
    currency: Currency,
    prices: Vec<PriceRow>,
}

async fn pricing(
    State(state): State<AppState>,
    Query(params): Query<PricingQueryParams>,
) -> Json<PricingResponse> {
    let currency = params.currency.unwrap_or(Currency::Usd);
    let prices = state
        .catalog
        .prices()
        .iter()
        .map(|p| PriceRow {
            course_slug: p.course_slug.clone(),
            price: p.display(currency).to_string(),
        })
        .collect();
    Json(PricingResponse { currency, prices })
}

#[derive(Debug, Serialize)]
struct CurrencyResponse {
    currency: Currency,
}

/// Detect the visitor's billing currency from their IP. Lookup failures
/// degrade to USD; this endpoint never errors.
async fn detect_currency(State(state): State<AppState>, headers: HeaderMap) -> Json<CurrencyResponse> {
    let forwarded_ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string());

    let currency = match state.geo.lookup_country(forwarded_ip.as_deref()).await {
        Ok(country) => currency_for_country(country.as_deref()),
        Err(e) => {
            warn!("currency detection failed, defaulting to USD: {}", e);
            Currency::Usd
        }
    };

    Json(CurrencyResponse { currency })
}

#[derive(Debug, Serialize)]
struct RecommendationCard {
    score: i32,
    course: Course,
}

/// Quiz endpoint. An empty list is the "no recommendation" outcome the
/// frontend renders as an advisor prompt; it is not an error.
async fn recommend(
    State(state): State<AppState>,
    Json(answers): Json<QuizAnswers>,
) -> Json<Vec<RecommendationCard>> {
    let cards = recommend_courses(&state.catalog, answers)
        .into_iter()
        .map(|course| RecommendationCard {
            score: course_score(&course.slug, answers),
            course: course.clone(),
        })
        .collect();
    Json(cards)
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().chars().count() < 2 {
        return Err(AppError::BadRequest(
            "Name must be at least 2 characters".to_string(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid {
        return Err(AppError::BadRequest(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

/// Forward a lead to the intake webhook. Fire-and-forget: a failed forward
/// is logged and the lead still succeeds, matching the site's behavior of
/// showing the confirmation state regardless.
async fn forward_lead(state: &AppState, payload: &LeadPayload) {
    match state.intake.submit(payload).await {
        Ok(()) => info!("lead {} forwarded to intake", payload.lead_id),
        Err(e) => warn!("intake forward failed for lead {}: {}", payload.lead_id, e),
    }
}

async fn register_lead(
    State(state): State<AppState>,
    Json(req): Json<RegisterLeadRequest>,
) -> Result<Json<LeadResponse>, AppError> {
    validate_name(&req.name)?;
    validate_email(&req.email)?;

    let course = state
        .catalog
        .course_by_slug(&req.course_slug)
        .ok_or_else(|| AppError::BadRequest("Please select a valid course".to_string()))?;
    if !course.is_live() {
        return Err(AppError::BadRequest(format!(
            "{} is not open for enrollment yet",
            course.title
        )));
    }

    let lead_id = Uuid::new_v4();
    let mut payload = LeadPayload {
        lead_id,
        lead_type: LeadType::Registration,
        course: course.title.clone(),
        name: req.name.clone(),
        email: req.email.clone(),
        age: None,
        grade: None,
        school: None,
        role: None,
        python: None,
        background: None,
        batch: req.batch.clone(),
        notes: req.notes.clone(),
    };

    let mut lines = vec![
        format!("Hi, I'd like to register for {}", course.title),
        String::new(),
        format!("Name: {}", req.name),
        format!("Email: {}", req.email),
    ];
    // The teen form asks what the student wants to build; the engineering
    // form has a plain notes field.
    let notes_label = match &req.details {
        RegistrantDetails::Student { age, grade, school } => {
            payload.age = Some(age.clone());
            payload.grade = Some(grade.clone());
            payload.school = Some(school.clone());
            lines.push(format!("Age: {}", age));
            lines.push(format!("Grade/Class: {}", grade));
            lines.push(format!("School: {}", school));
            "Would love to build"
        }
        RegistrantDetails::Engineer { role, python } => {
            payload.role = Some(role.clone());
            payload.python = Some(python.clone());
            lines.push(format!("Current Role: {}", role));
            lines.push(format!("Python Experience: {}", python));
            "Notes"
        }
    };
    forward_lead(&state, &payload).await;

    if let Some(batch) = req.batch.as_deref().filter(|b| !b.is_empty()) {
        lines.push(format!("Preferred Batch: {}", batch));
    }
    if let Some(notes) = req.notes.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("{}: {}", notes_label, notes));
    }
    let whatsapp_url = state.config.whatsapp_link(&lines.join("\n"));

    Ok(Json(LeadResponse {
        lead_id,
        message: "You'll be connected to us on WhatsApp to complete your registration."
            .to_string(),
        whatsapp_url: Some(whatsapp_url),
    }))
}

async fn pre_register_lead(
    State(state): State<AppState>,
    Json(req): Json<PreRegisterLeadRequest>,
) -> Result<Json<LeadResponse>, AppError> {
    validate_name(&req.name)?;
    validate_email(&req.email)?;
    if req.background.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please select your background".to_string(),
        ));
    }

    let course = state
        .catalog
        .course_by_slug(&req.course_slug)
        .ok_or_else(|| AppError::BadRequest("Please select a valid course".to_string()))?;
    if course.status != CourseStatus::PreRegister {
        return Err(AppError::BadRequest(format!(
            "{} is already open for enrollment",
            course.title
        )));
    }

    let lead_id = Uuid::new_v4();
    let payload = LeadPayload {
        lead_id,
        lead_type: LeadType::PreRegistration,
        course: course.title.clone(),
        name: req.name,
        email: req.email,
        age: None,
        grade: None,
        school: None,
        role: None,
        python: None,
        background: Some(req.background),
        batch: None,
        notes: req.notes,
    };
    forward_lead(&state, &payload).await;

    Ok(Json(LeadResponse {
        lead_id,
        message: "You're on the list! We'll let you know as soon as this course is scheduled."
            .to_string(),
        whatsapp_url: None,
    }))
}
