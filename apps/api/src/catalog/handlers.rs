use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog::{JobListing, Module, RoadmapPhase, Specialization, SpecializationSummary};
use crate::errors::AppError;
use crate::state::AppState;

fn lookup<'a>(state: &'a AppState, id: &str) -> Result<&'a Specialization, AppError> {
    state
        .catalog
        .get(id)
        .ok_or_else(AppError::specialization_not_found)
}

/// GET /api/specializations
pub async fn handle_list_specializations(
    State(state): State<AppState>,
) -> Json<Vec<SpecializationSummary>> {
    Json(state.catalog.summaries())
}

/// GET /api/specializations/:id
pub async fn handle_get_specialization(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Specialization>, AppError> {
    Ok(Json(lookup(&state, &id)?.clone()))
}

/// GET /api/specializations/:id/modules
pub async fn handle_get_modules(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Module>>, AppError> {
    Ok(Json(lookup(&state, &id)?.modules.clone()))
}

/// GET /api/specializations/:id/roadmap
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RoadmapPhase>>, AppError> {
    Ok(Json(lookup(&state, &id)?.roadmap.clone()))
}

/// GET /api/specializations/:id/jobs
pub async fn handle_get_jobs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    Ok(Json(lookup(&state, &id)?.jobs.clone()))
}
