//! HTTP routes for the tool list page.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    cancel_edit, confirm_edit, create_tool, delete_tool, dismiss_toast, health, index,
    list_tools, toggle_edit, ToolShelfState,
};

/// Creates the tool shelf router with all endpoints.
pub fn tool_shelf_router(state: ToolShelfState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tools", post(create_tool))
        .route("/tools/:id/edit", post(toggle_edit))
        .route("/tools/:id/cancel", post(cancel_edit))
        .route("/tools/:id/confirm", post(confirm_edit))
        .route("/tools/:id/delete", post(delete_tool))
        .route("/toasts/:id/dismiss", post(dismiss_toast))
        .route("/api/tools", get(list_tools))
        .route("/health", get(health))
        .with_state(state)
}
