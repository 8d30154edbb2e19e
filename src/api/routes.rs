use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        // Project ideas
        .route("/projects", post(handlers::get_projects))
        .route("/guidance/:project_title", get(handlers::get_guidance))
        .route("/predict-success", get(handlers::predict_success))
        .route("/academic-projects", get(handlers::get_academic_projects))
        // Listings
        .route("/hackathons", get(handlers::get_hackathons))
        .route("/hackathons/add", post(handlers::add_hackathon))
        .route("/sih", get(handlers::get_sih_problems))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}
