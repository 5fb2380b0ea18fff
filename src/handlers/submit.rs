use crate::error::{ApiError, ErrorResponse};
use crate::models::{ANONYMOUS_NAME, AckResponse, FeedbackRecord, NO_EMAIL};
use crate::routes;
use crate::state::AppState;
use crate::store::FEEDBACK_PREFIX;
use anyhow::Context;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

/// Single validation message covering every required-field failure.
pub const REQUIRED_FIELDS_ERROR: &str = "Message, rating, and timestamp are required";

pub const SAVED_MESSAGE: &str = "Feedback saved successfully";

/// POST /submit-feedback handler - Persist a feedback submission
///
/// The body is taken as raw JSON so a non-numeric `rating` (or any missing
/// required field) yields the contract's one validation error instead of a
/// deserializer message. Optional identity fields fall back to sentinels.
/// The record key embeds the caller-supplied timestamp plus a UUID v4, so
/// simultaneous submissions with the same timestamp cannot collide.
#[utoipa::path(
    post,
    path = routes::SUBMIT_FEEDBACK,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Feedback stored", body = AckResponse),
        (status = 400, description = "Missing or malformed required field", body = ErrorResponse),
        (status = 500, description = "Store write failed", body = ErrorResponse)
    ),
    tag = "feedback"
)]
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<AckResponse>), ApiError> {
    let message = body
        .get("message")
        .and_then(JsonValue::as_str)
        .unwrap_or("");
    let rating = body.get("rating").and_then(JsonValue::as_number);
    let timestamp = body.get("timestamp").and_then(JsonValue::as_str);

    let (rating, timestamp) = match (rating, timestamp) {
        (Some(rating), Some(timestamp)) if !message.is_empty() => {
            (rating.clone(), timestamp.to_string())
        }
        _ => return Err(ApiError::Validation(REQUIRED_FIELDS_ERROR.to_string())),
    };

    let record = FeedbackRecord {
        message: message.to_string(),
        rating,
        name: body
            .get("name")
            .and_then(JsonValue::as_str)
            .unwrap_or(ANONYMOUS_NAME)
            .to_string(),
        email: body
            .get("email")
            .and_then(JsonValue::as_str)
            .unwrap_or(NO_EMAIL)
            .to_string(),
        timestamp: timestamp.clone(),
        approved: false,
        extra: Map::new(),
    };

    let key = format!("{}{}_{}", FEEDBACK_PREFIX, timestamp, Uuid::new_v4());
    let value =
        serde_json::to_string(&record).context("Failed to serialize feedback record")?;

    state.store.put(&key, &value).await?;

    tracing::info!("Stored feedback under key: {}", key);
    Ok((
        StatusCode::OK,
        Json(AckResponse {
            message: SAVED_MESSAGE.to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::store::{KvStore, LIST_PAGE_SIZE, MemoryStore, testing::FailingStore};
    use axum::{Router, body::Body, http::Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let state = AppState {
            store: store.clone(),
        };

        (app::router(state), store)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_submit_success_stores_normalized_record() {
        let (app, store) = setup_test_app();

        let response = app
            .oneshot(post_json(
                "/submit-feedback",
                serde_json::json!({
                    "message": "Great tool",
                    "rating": 5,
                    "timestamp": "2024-01-01T00:00:00Z"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let ack: AckResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(ack.message, "Feedback saved successfully");

        let keys = store.list_keys(FEEDBACK_PREFIX, LIST_PAGE_SIZE).await.unwrap();
        assert_eq!(keys.len(), 1);
        assert!(keys[0].starts_with("feedback_2024-01-01T00:00:00Z_"));

        let raw = store.get(&keys[0]).await.unwrap().unwrap();
        let record: FeedbackRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.message, "Great tool");
        assert_eq!(record.rating, serde_json::Number::from(5));
        assert_eq!(record.name, "Anonymous");
        assert_eq!(record.email, "N/A");
        assert_eq!(record.timestamp, "2024-01-01T00:00:00Z");
        assert!(!record.approved);
    }

    #[tokio::test]
    async fn test_submit_keeps_supplied_name_and_email() {
        let (app, store) = setup_test_app();

        let response = app
            .oneshot(post_json(
                "/submit-feedback",
                serde_json::json!({
                    "message": "ok",
                    "rating": 3,
                    "timestamp": "t1",
                    "name": "Ada",
                    "email": "ada@example.com"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let keys = store.list_keys(FEEDBACK_PREFIX, LIST_PAGE_SIZE).await.unwrap();
        let raw = store.get(&keys[0]).await.unwrap().unwrap();
        let record: FeedbackRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_submit_empty_message_rejected_without_write() {
        let (app, store) = setup_test_app();

        let response = app
            .oneshot(post_json(
                "/submit-feedback",
                serde_json::json!({"message": "", "rating": 5, "timestamp": "t"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Message, rating, and timestamp are required");

        let keys = store.list_keys(FEEDBACK_PREFIX, LIST_PAGE_SIZE).await.unwrap();
        assert!(keys.is_empty());
    }

    #[tokio::test]
    async fn test_submit_non_numeric_rating_rejected() {
        let (app, store) = setup_test_app();

        let response = app
            .oneshot(post_json(
                "/submit-feedback",
                serde_json::json!({"message": "hi", "rating": "5", "timestamp": "t"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let keys = store.list_keys(FEEDBACK_PREFIX, LIST_PAGE_SIZE).await.unwrap();
        assert!(keys.is_empty());
    }

    #[tokio::test]
    async fn test_submit_missing_timestamp_rejected() {
        let (app, _store) = setup_test_app();

        let response = app
            .oneshot(post_json(
                "/submit-feedback",
                serde_json::json!({"message": "hi", "rating": 5}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submit_wrong_method_rejected() {
        let (app, _store) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/submit-feedback")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_submit_unique_keys_for_same_timestamp() {
        let (app, store) = setup_test_app();

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_json(
                    "/submit-feedback",
                    serde_json::json!({"message": "hi", "rating": 1, "timestamp": "same"}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let keys = store.list_keys(FEEDBACK_PREFIX, LIST_PAGE_SIZE).await.unwrap();
        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
    }

    #[tokio::test]
    async fn test_submit_store_write_failure_maps_to_500() {
        let state = AppState {
            store: Arc::new(FailingStore),
        };
        let app = app::router(state);

        let response = app
            .oneshot(post_json(
                "/submit-feedback",
                serde_json::json!({"message": "hi", "rating": 1, "timestamp": "t"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("Store error"));
    }

    #[tokio::test]
    async fn test_responses_carry_cors_headers() {
        let (app, _store) = setup_test_app();

        let response = app
            .oneshot(post_json(
                "/submit-feedback",
                serde_json::json!({"message": "hi", "rating": 1, "timestamp": "t"}),
            ))
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-methods")
                .unwrap(),
            "GET, POST, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_preflight_returns_empty_204() {
        let (app, _store) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/submit-feedback")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
