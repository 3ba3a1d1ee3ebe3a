use axum::extract::{Multipart, Path, State};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::{AppError, AppJson, JsonOrDefault};
use crate::progress::cv::{placeholder_analysis, CvAnalysis};
use crate::progress::models::{
    Certificate, ProgressRecord, ProgressUpdate, User, UserOverview, UserProfile,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: &'static str,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub message: &'static str,
    pub progress: ProgressRecord,
}

#[derive(Debug, Serialize)]
pub struct CvUploadResponse {
    pub message: &'static str,
    pub analysis: CvAnalysis,
}

#[derive(Debug, Serialize)]
pub struct CertificateResponse {
    pub message: &'static str,
    pub certificate: Certificate,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/users/:user_id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<AppJson<UserOverview>, AppError> {
    Ok(AppJson(state.store.user_overview(&user_id).await?))
}

/// POST /api/users/:user_id
pub async fn handle_upsert_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonOrDefault(profile): JsonOrDefault<UserProfile>,
) -> Result<AppJson<UserResponse>, AppError> {
    let user = state.store.upsert_user(&user_id, profile, Utc::now()).await?;
    Ok(AppJson(UserResponse {
        message: "User profile updated successfully",
        user,
    }))
}

/// GET /api/users/:user_id/progress/:specialization_id
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Path((user_id, specialization_id)): Path<(String, String)>,
) -> Result<AppJson<ProgressRecord>, AppError> {
    let record = state
        .store
        .get_progress(&user_id, &specialization_id)
        .await?;
    Ok(AppJson(record))
}

/// POST /api/users/:user_id/progress/:specialization_id
pub async fn handle_update_progress(
    State(state): State<AppState>,
    Path((user_id, specialization_id)): Path<(String, String)>,
    JsonOrDefault(update): JsonOrDefault<ProgressUpdate>,
) -> Result<AppJson<ProgressResponse>, AppError> {
    let progress = state
        .store
        .upsert_progress(&user_id, &specialization_id, update)
        .await?;
    Ok(AppJson(ProgressResponse {
        message: "Progress updated successfully",
        progress,
    }))
}

/// POST /api/users/:user_id/cv-upload
///
/// Any multipart body is drained and logged; the analysis returned is fixed.
pub async fn handle_cv_upload(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    upload: Option<Multipart>,
) -> Result<AppJson<CvUploadResponse>, AppError> {
    state.store.ensure_user(&user_id).await?;

    if let Some(mut multipart) = upload {
        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().unwrap_or_default().to_string();
            let size = field.bytes().await?.len();
            debug!(%user_id, %field_name, %file_name, size, "Received CV part");
        }
    }

    info!(%user_id, "CV analyzed");
    Ok(AppJson(CvUploadResponse {
        message: "CV analyzed successfully",
        analysis: placeholder_analysis(),
    }))
}

/// POST /api/users/:user_id/certificate/:specialization_id/:module_id
pub async fn handle_issue_certificate(
    State(state): State<AppState>,
    Path((user_id, specialization_id, module_id)): Path<(String, String, String)>,
) -> Result<AppJson<CertificateResponse>, AppError> {
    let certificate = state
        .issuer
        .issue(
            state.store.as_ref(),
            &state.rng,
            &user_id,
            &specialization_id,
            &module_id,
            Utc::now(),
        )
        .await?;
    Ok(AppJson(CertificateResponse {
        message: "Certificate generated successfully",
        certificate,
    }))
}

/// GET /api/users/:user_id/certificates
pub async fn handle_list_certificates(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<AppJson<Vec<Certificate>>, AppError> {
    Ok(AppJson(state.store.list_certificates(&user_id).await?))
}
