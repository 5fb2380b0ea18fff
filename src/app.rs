use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::cors::{apply_cors_headers, preflight_handler};
use crate::handlers::{approve_handler, health_handler, pending_handler, submit_handler};
use crate::routes;
use crate::state::AppState;

/// Assemble the full service router.
///
/// Unknown paths fall through to axum's 404; a known path with the wrong
/// method yields 405. Every route also answers OPTIONS with an empty 204.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HEALTH, get(health_handler))
        .route(
            routes::SUBMIT_FEEDBACK,
            post(submit_handler).options(preflight_handler),
        )
        .route(
            routes::PENDING_FEEDBACK,
            get(pending_handler).options(preflight_handler),
        )
        .route(
            routes::APPROVE_FEEDBACK,
            post(approve_handler).options(preflight_handler),
        )
        .layer(middleware::from_fn(apply_cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
