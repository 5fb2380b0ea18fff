use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{AckResponse, ApproveRequest, FeedbackRecord, PendingEntry};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "feedback-kv API",
        version = "1.0.0",
        description = "Feedback intake and admin moderation over a key-value store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::submit::submit_handler,
        handlers::pending::pending_handler,
        handlers::approve::approve_handler
    ),
    components(
        schemas(
            FeedbackRecord,
            PendingEntry,
            AckResponse,
            ApproveRequest,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "feedback", description = "Feedback intake and moderation operations")
    )
)]
pub struct ApiDoc;
