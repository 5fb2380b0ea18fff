// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const SUBMIT_FEEDBACK: &str = "/submit-feedback";
pub const PENDING_FEEDBACK: &str = "/pending-feedback";
pub const APPROVE_FEEDBACK: &str = "/approve-feedback";
