//! HTTP routes for tutor endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_session, get_modules, get_progress, post_message, select_module, TutorHandlers,
};

/// Creates the tutor router with all endpoints.
pub fn tutor_routes(handlers: TutorHandlers) -> Router {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:id/messages", post(post_message))
        .route("/sessions/:id/module", post(select_module))
        .route("/sessions/:id/modules", get(get_modules))
        .route("/sessions/:id/progress", get(get_progress))
        .with_state(handlers)
}
