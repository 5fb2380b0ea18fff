use crate::error::{ApiError, ErrorResponse};
use crate::models::{FeedbackRecord, PendingEntry};
use crate::routes;
use crate::state::AppState;
use crate::store::{FEEDBACK_PREFIX, LIST_PAGE_SIZE};
use axum::{Json, extract::State, http::StatusCode};

/// GET /pending-feedback handler - List feedback awaiting approval
///
/// Fetches one page of feedback keys (first 100, no further pagination) and
/// returns every record whose `approved` field is not `true`, each annotated
/// with its store key so the admin client can reference it in an approval
/// call. Values that fail to parse are skipped, never fatal.
#[utoipa::path(
    get,
    path = routes::PENDING_FEEDBACK,
    responses(
        (status = 200, description = "Pending feedback records", body = [PendingEntry]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "feedback"
)]
pub async fn pending_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<PendingEntry>>), ApiError> {
    let keys = state
        .store
        .list_keys(FEEDBACK_PREFIX, LIST_PAGE_SIZE)
        .await?;

    // Fire out all value fetches, then await them together; bounded by the
    // single listed page.
    let fetches = keys.iter().map(|key| state.store.get(key));
    let values = futures::future::join_all(fetches).await;

    let mut entries = Vec::new();
    for (key, value) in keys.into_iter().zip(values) {
        let Some(raw) = value? else {
            continue;
        };
        let record: FeedbackRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("Skipping unparseable record under {}: {}", key, err);
                continue;
            }
        };
        if record.approved {
            continue;
        }
        entries.push(PendingEntry { key, record });
    }

    tracing::info!("Listed {} pending feedback records", entries.len());
    Ok((StatusCode::OK, Json(entries)))
}
