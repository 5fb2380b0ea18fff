use crate::error::{ApiError, ErrorResponse};
use crate::models::{AckResponse, ApproveRequest, FeedbackRecord};
use crate::routes;
use crate::state::AppState;
use anyhow::Context;
use axum::{Json, extract::State, http::StatusCode};

pub const KEY_REQUIRED_ERROR: &str = "Key is required";
pub const NOT_FOUND_ERROR: &str = "Feedback not found";
pub const APPROVED_MESSAGE: &str = "Feedback approved";

/// POST /approve-feedback handler - Mark a feedback record approved
///
/// Reads the full record, sets `approved`, and writes the whole object back
/// under the same key; unknown fields survive the round-trip. The
/// read-modify-write is unguarded: concurrent approvals of the same key both
/// write `approved = true`, so last-writer-wins is harmless. Re-approving an
/// already-approved record succeeds and changes nothing.
#[utoipa::path(
    post,
    path = routes::APPROVE_FEEDBACK,
    request_body = ApproveRequest,
    responses(
        (status = 200, description = "Feedback approved", body = AckResponse),
        (status = 400, description = "Missing key", body = ErrorResponse),
        (status = 404, description = "No record under the given key", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "feedback"
)]
pub async fn approve_handler(
    State(state): State<AppState>,
    Json(body): Json<ApproveRequest>,
) -> Result<(StatusCode, Json<AckResponse>), ApiError> {
    let key = body
        .key
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ApiError::Validation(KEY_REQUIRED_ERROR.to_string()))?;

    let raw = state
        .store
        .get(&key)
        .await?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND_ERROR.to_string()))?;

    let mut record: FeedbackRecord =
        serde_json::from_str(&raw).context("Failed to parse stored feedback record")?;
    record.approved = true;

    let value =
        serde_json::to_string(&record).context("Failed to serialize feedback record")?;
    state.store.put(&key, &value).await?;

    tracing::info!("Approved feedback under key: {}", key);
    Ok((
        StatusCode::OK,
        Json(AckResponse {
            message: APPROVED_MESSAGE.to_string(),
        }),
    ))
}
