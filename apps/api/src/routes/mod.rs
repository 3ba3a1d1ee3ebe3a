pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::catalog::handlers as catalog;
use crate::errors::AppError;
use crate::progress::handlers as progress;
use crate::state::AppState;

async fn route_not_found() -> AppError {
    AppError::route_not_found()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        // Catalog
        .route(
            "/api/specializations",
            get(catalog::handle_list_specializations),
        )
        .route(
            "/api/specializations/:id",
            get(catalog::handle_get_specialization),
        )
        .route(
            "/api/specializations/:id/modules",
            get(catalog::handle_get_modules),
        )
        .route(
            "/api/specializations/:id/roadmap",
            get(catalog::handle_get_roadmap),
        )
        .route(
            "/api/specializations/:id/jobs",
            get(catalog::handle_get_jobs),
        )
        // Assistant
        .route(
            "/api/ai/recommend-module",
            post(assistant::handle_recommend_module),
        )
        .route("/api/ai/suggest-jobs", post(assistant::handle_suggest_jobs))
        .route("/api/ai/chat", post(assistant::handle_chat))
        .route(
            "/api/ai/capabilities",
            get(assistant::handle_capabilities),
        )
        // Users, progress, certificates
        .route(
            "/api/users/:user_id",
            get(progress::handle_get_user).post(progress::handle_upsert_user),
        )
        .route(
            "/api/users/:user_id/progress/:specialization_id",
            get(progress::handle_get_progress).post(progress::handle_update_progress),
        )
        .route(
            "/api/users/:user_id/cv-upload",
            post(progress::handle_cv_upload),
        )
        .route(
            "/api/users/:user_id/certificate/:specialization_id/:module_id",
            post(progress::handle_issue_certificate),
        )
        .route(
            "/api/users/:user_id/certificates",
            get(progress::handle_list_certificates),
        )
        .fallback(route_not_found)
        .with_state(state)
}
