use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as JsonValue};

/// Sentinel stored when a submission carries no name.
pub const ANONYMOUS_NAME: &str = "Anonymous";
/// Sentinel stored when a submission carries no email.
pub const NO_EMAIL: &str = "N/A";

/// A feedback record as persisted in the key-value store.
///
/// Stored as a JSON-encoded string value. Fields this service does not
/// recognize are captured in `extra` and round-tripped untouched, so an
/// approval write-back preserves the whole stored object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct FeedbackRecord {
    pub message: String,
    #[schema(value_type = f64)]
    pub rating: Number,
    pub name: String,
    pub email: String,
    pub timestamp: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, JsonValue>,
}

/// Acknowledgment body returned by the submit and approve endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AckResponse {
    pub message: String,
}

/// Request body for the approve endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ApproveRequest {
    #[serde(default)]
    pub key: Option<String>,
}

/// A pending feedback record annotated with its store key
///
/// The key is what the admin client passes back to the approve endpoint.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PendingEntry {
    pub key: String,
    #[serde(flatten)]
    pub record: FeedbackRecord,
}
