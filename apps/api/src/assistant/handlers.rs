//! Axum route handlers for the assistant API.

use axum::extract::State;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::assistant::chat::{reply_to, ChatReply};
use crate::assistant::jobs::{suggest_jobs, JobSuggestionResult};
use crate::assistant::recommend::{recommend_module, RecommendationResult};
use crate::assistant::tags::TagList;
use crate::assistant::{capabilities, Capabilities};
use crate::errors::{AppError, AppJson, JsonOrDefault};
use crate::random::lock_rng;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendModuleRequest {
    pub user_interests: TagList,
    pub current_level: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestJobsRequest {
    pub user_interests: TagList,
    /// Accepted for compatibility; scoring only looks at interests.
    pub skills: TagList,
    pub preferred_specialization: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub context: Option<Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/recommend-module
pub async fn handle_recommend_module(
    State(state): State<AppState>,
    JsonOrDefault(request): JsonOrDefault<RecommendModuleRequest>,
) -> Result<AppJson<RecommendationResult>, AppError> {
    let result = {
        let mut rng = lock_rng(&state.rng)?;
        recommend_module(
            &mut *rng,
            request.current_level.as_deref(),
            &request.user_interests,
            request.specialization.as_deref(),
        )
    };
    Ok(AppJson(result))
}

/// POST /api/ai/suggest-jobs
pub async fn handle_suggest_jobs(
    State(state): State<AppState>,
    JsonOrDefault(request): JsonOrDefault<SuggestJobsRequest>,
) -> Result<AppJson<JobSuggestionResult>, AppError> {
    debug!(
        interests = request.user_interests.len(),
        skills = request.skills.len(),
        "Suggesting jobs"
    );
    let result = {
        let mut rng = lock_rng(&state.rng)?;
        suggest_jobs(
            &mut *rng,
            request.preferred_specialization.as_deref(),
            &request.user_interests,
        )
    };
    Ok(AppJson(result))
}

/// POST /api/ai/chat
///
/// Any string is accepted, including empty. A missing message is an internal error.
pub async fn handle_chat(
    AppJson(request): AppJson<ChatRequest>,
) -> Result<AppJson<ChatReply>, AppError> {
    let message = request
        .message
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("chat request without a message")))?;
    debug!(has_context = request.context.is_some(), "Chat message received");
    Ok(AppJson(reply_to(&message, Utc::now())))
}

/// GET /api/ai/capabilities
pub async fn handle_capabilities() -> AppJson<Capabilities> {
    AppJson(capabilities())
}
