use actix_web::{web, HttpResponse, Responder};
use crate::core::{MatchError, Matcher};
use crate::models::{ApiInfoResponse, ErrorResponse, HealthResponse};
use std::collections::BTreeMap;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure all mentor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match-mentor/{student_id}", web::get().to(match_mentor));
}

/// Service description
///
/// GET /
pub async fn api_info() -> impl Responder {
    let mut endpoints = BTreeMap::new();
    endpoints.insert(
        "/api/match-mentor/{student_id}".to_string(),
        "Get mentor matches for a student".to_string(),
    );
    endpoints.insert("/api/health".to_string(), "Service health".to_string());

    HttpResponse::Ok().json(ApiInfoResponse {
        message: "Mentor Matching API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (status, mentors) = match state.matcher.mentor_count() {
        Ok(count) if count > 0 => ("healthy", count),
        Ok(count) => ("degraded", count),
        Err(e) => {
            tracing::warn!("Mentor directory unavailable: {}", e);
            ("degraded", 0)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        mentors,
    })
}

/// Match mentor endpoint
///
/// GET /api/match-mentor/{student_id}
///
/// Response body:
/// ```json
/// {
///   "student": { "id": "S001", ... },
///   "best_match": { "id": "M001", ... },
///   "alternatives": [{ "id": "M004", ... }, { "id": "M005", ... }]
/// }
/// ```
async fn match_mentor(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let student_id = path.into_inner();
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!("Matching mentors for student: {} (request {})", student_id, request_id);

    match state.matcher.match_mentors(&student_id) {
        Ok(result) => HttpResponse::Ok()
            .insert_header(("X-Request-Id", request_id))
            .json(result),
        Err(e @ MatchError::StudentNotFound(_)) => {
            tracing::info!("{} (request {})", e, request_id);
            HttpResponse::NotFound()
                .insert_header(("X-Request-Id", request_id))
                .json(ErrorResponse::new(e.to_string()))
        }
        Err(e) => {
            tracing::error!(
                "Error in mentor matching for {} (request {}): {}",
                student_id,
                request_id,
                e
            );
            HttpResponse::InternalServerError()
                .insert_header(("X-Request-Id", request_id))
                .json(ErrorResponse::internal())
        }
    }
}
