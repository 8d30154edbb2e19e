use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{
    AcademicProjects, Guidance, Hackathon, IdeaQuery, NewHackathon, ProjectIdea, SihProblem,
    SuccessPrediction,
};
use crate::services::scoring;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct GuidanceParams {
    pub course: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HackathonParams {
    /// Look-ahead window in months
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,
}

fn default_months_ahead() -> u32 {
    3
}

#[derive(Debug, Serialize)]
pub struct HackathonAdded {
    pub message: String,
    pub hackathon: Hackathon,
}

#[derive(Debug, Deserialize)]
pub struct SihParams {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct PredictParams {
    pub course: String,
    pub project_title: String,
    pub difficulty: String,
    #[serde(default = "default_hardware")]
    pub hardware_required: String,
}

fn default_hardware() -> String {
    "None".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AcademicParams {
    pub course: String,
    pub academic_year: u8,
    /// job_preparation, portfolio or both
    #[serde(default = "default_focus")]
    pub focus: String,
}

fn default_focus() -> String {
    "job_preparation".to_string()
}

// Handlers

/// Service description and endpoint index
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Project Advisor API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/projects": "Get project ideas based on course and preferences",
            "/hackathons": "Get upcoming hackathons",
            "/hackathons/add": "Add a new hackathon",
            "/sih": "Get SIH problem statements",
            "/guidance/{project_title}": "Get implementation guidance for a project",
            "/predict-success": "Predict the success percentage of a project idea",
            "/academic-projects": "Get year-based projects for job preparation"
        }
    }))
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Project ideas for a course, year and difficulty
pub async fn get_projects(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(query): Json<IdeaQuery>,
) -> AppResult<Json<Vec<ProjectIdea>>> {
    if query.course.trim().is_empty() {
        return Err(AppError::InvalidInput("Course cannot be empty".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        course = %query.course,
        academic_year = ?query.academic_year,
        difficulty = ?query.difficulty_level,
        "Processing project ideas request"
    );

    let ideas = state.selector.get_project_ideas(&query).await;
    Ok(Json(ideas))
}

/// Implementation guidance for one project
pub async fn get_guidance(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(project_title): Path<String>,
    Query(params): Query<GuidanceParams>,
) -> AppResult<Json<Guidance>> {
    if project_title.trim().is_empty() {
        return Err(AppError::InvalidInput("Project title cannot be empty".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        project_title = %project_title,
        course = %params.course,
        "Processing guidance request"
    );

    let guidance = state
        .guidance
        .get_implementation_guidance(
            &project_title,
            &params.course,
            params.description.as_deref().unwrap_or_default(),
        )
        .await;

    Ok(Json(guidance))
}

/// Hackathons in the next few months
pub async fn get_hackathons(
    State(state): State<AppState>,
    Query(params): Query<HackathonParams>,
) -> Json<Vec<Hackathon>> {
    let today = chrono::Local::now().date_naive();
    let listings = state.listings.read().await;
    Json(listings.upcoming_hackathons(today, params.months_ahead))
}

/// Register a new hackathon
pub async fn add_hackathon(
    State(state): State<AppState>,
    Json(request): Json<NewHackathon>,
) -> AppResult<(StatusCode, Json<HackathonAdded>)> {
    let hackathon = request.validate()?;

    let mut listings = state.listings.write().await;
    listings.add_hackathon(hackathon.clone()).await?;

    tracing::info!(name = %hackathon.name, date = %hackathon.date, "Hackathon added");

    Ok((
        StatusCode::CREATED,
        Json(HackathonAdded {
            message: "Hackathon added successfully".to_string(),
            hackathon,
        }),
    ))
}

/// SIH problem statements filtered by domain and year
pub async fn get_sih_problems(
    State(state): State<AppState>,
    Query(params): Query<SihParams>,
) -> Json<Vec<SihProblem>> {
    let listings = state.listings.read().await;
    Json(listings.sih_problems(params.domain.as_deref(), params.year))
}

/// Heuristic success estimate for a single project title
pub async fn predict_success(Query(params): Query<PredictParams>) -> Json<SuccessPrediction> {
    Json(scoring::predict(
        &params.course,
        &params.project_title,
        &params.difficulty,
        &params.hardware_required,
    ))
}

/// Year-based projects aimed at job preparation
pub async fn get_academic_projects(
    State(state): State<AppState>,
    Query(params): Query<AcademicParams>,
) -> AppResult<Json<AcademicProjects>> {
    if params.course.trim().is_empty() {
        return Err(AppError::InvalidInput("Course cannot be empty".to_string()));
    }

    let plan = state
        .selector
        .academic_projects(&params.course, params.academic_year, &params.focus)
        .await;

    Ok(Json(plan))
}
