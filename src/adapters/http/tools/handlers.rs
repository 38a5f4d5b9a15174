//! HTTP handlers for the tool list page.
//!
//! Every page action is a form POST answered with a redirect to `/`, so a
//! refresh never resubmits it.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::application::tool_list::{ToolListPage, ToolListView};
use crate::domain::foundation::{Timestamp, ToastId, ToolId};
use crate::domain::tool::ToolError;

use super::dto::{
    CreateToolForm, ErrorResponse, HealthResponse, RowEditForm, ToolListResponse,
};
use super::page::PageRenderer;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared page state. The lock serializes UI events.
#[derive(Clone)]
pub struct ToolShelfState {
    view: Arc<Mutex<ToolListView>>,
    pages: Arc<PageRenderer>,
}

impl ToolShelfState {
    pub fn new(view: ToolListView, pages: PageRenderer) -> Self {
        Self {
            view: Arc::new(Mutex::new(view)),
            pages: Arc::new(pages),
        }
    }

    pub fn view(&self) -> &Arc<Mutex<ToolListView>> {
        &self.view
    }
}

/// Runs one view event on its own task so it completes even when the request
/// is dropped, e.g. by the timeout layer.
async fn run_event<F, Fut>(state: &ToolShelfState, event: F) -> Response
where
    F: FnOnce(OwnedMutexGuard<ToolListView>) -> Fut + Send + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    let view = state.view.clone();
    let task = tokio::spawn(async move { event(view.lock_owned().await).await });

    match task.await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "View event task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to apply page event")),
            )
                .into_response()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Page handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Render the tool list page
pub async fn index(State(state): State<ToolShelfState>) -> Response {
    let page = state.view.lock().await.render(Timestamp::now());
    let status = match page {
        ToolListPage::Fallback => StatusCode::NOT_FOUND,
        ToolListPage::Ready(_) => StatusCode::OK,
    };

    match state.pages.render(&page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to render page")),
            )
                .into_response()
        }
    }
}

/// POST /tools - Submit the create form
pub async fn create_tool(
    State(state): State<ToolShelfState>,
    Form(form): Form<CreateToolForm>,
) -> Response {
    run_event(&state, move |mut view| async move {
        for (field, value) in form.fields() {
            if let Err(e) = view.handle_input_change(field, value) {
                return settle::<()>(Err(e));
            }
        }
        settle(view.handle_form_submit().await)
    })
    .await
}

/// POST /tools/:id/edit - Toggle the row's edit mode
pub async fn toggle_edit(
    State(state): State<ToolShelfState>,
    Path(tool_id): Path<String>,
) -> Response {
    let id = match parse_tool_id(&tool_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    run_event(&state, move |mut view| async move { settle(view.toggle_row_edit(&id)) }).await
}

/// POST /tools/:id/cancel - Leave edit mode without saving
pub async fn cancel_edit(
    State(state): State<ToolShelfState>,
    Path(tool_id): Path<String>,
) -> Response {
    let id = match parse_tool_id(&tool_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    run_event(&state, move |mut view| async move { settle(view.close_row(&id)) }).await
}

/// POST /tools/:id/confirm - Apply the submitted inputs and commit the row
pub async fn confirm_edit(
    State(state): State<ToolShelfState>,
    Path(tool_id): Path<String>,
    Form(form): Form<RowEditForm>,
) -> Response {
    let id = match parse_tool_id(&tool_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    run_event(&state, move |mut view| async move {
        for (field, value) in form.fields() {
            if let Err(e) = view.change_row_field(&id, field, value) {
                return settle::<()>(Err(e));
            }
        }
        settle(view.confirm_row(&id).await)
    })
    .await
}

/// POST /tools/:id/delete - Delete the row's tool
pub async fn delete_tool(
    State(state): State<ToolShelfState>,
    Path(tool_id): Path<String>,
) -> Response {
    let id = match parse_tool_id(&tool_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    run_event(&state, move |mut view| async move { settle(view.delete_row(&id).await) }).await
}

/// POST /toasts/:id/dismiss - Close a toast on click
pub async fn dismiss_toast(
    State(state): State<ToolShelfState>,
    Path(toast_id): Path<String>,
) -> Response {
    let id = match toast_id.parse::<ToastId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid toast ID")),
            )
                .into_response()
        }
    };

    run_event(&state, move |mut view| async move {
        // Already gone when it timed out first.
        view.dismiss_toast(&id);
        Redirect::to("/").into_response()
    })
    .await
}

// ════════════════════════════════════════════════════════════════════════════
// API handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/tools - Local tool list as JSON
pub async fn list_tools(State(state): State<ToolShelfState>) -> Response {
    let view = state.view.lock().await;
    (StatusCode::OK, Json(ToolListResponse::from_tools(view.tools()))).into_response()
}

/// GET /health - Liveness check
pub async fn health(State(state): State<ToolShelfState>) -> Response {
    let mounted = state.view.lock().await.is_mounted();
    Json(HealthResponse {
        status: "ok",
        mounted,
    })
    .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_tool_id(raw: &str) -> Result<ToolId, Response> {
    raw.parse::<ToolId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid tool ID")),
        )
            .into_response()
    })
}

/// Redirects back to the page unless the event itself was rejected.
///
/// Store failures already show up in the view state (fallback page, rolled
/// back row) or in the log, so they redirect like a success. Events refused by
/// the fallback page redirect to it as well.
fn settle<T>(result: Result<T, ToolError>) -> Response {
    match result {
        Ok(_)
        | Err(ToolError::Fetch(_))
        | Err(ToolError::Create(_))
        | Err(ToolError::Update { .. })
        | Err(ToolError::Delete { .. })
        | Err(ToolError::Fallback) => Redirect::to("/").into_response(),
        Err(e) => handle_tool_error(e),
    }
}

fn handle_tool_error(error: ToolError) -> Response {
    let status = match &error {
        ToolError::UnknownRow(_) => StatusCode::NOT_FOUND,
        ToolError::Validation(_) => StatusCode::BAD_REQUEST,
        ToolError::Fallback => StatusCode::CONFLICT,
        ToolError::Fetch(_) => StatusCode::SERVICE_UNAVAILABLE,
        ToolError::Create(_) | ToolError::Update { .. } | ToolError::Delete { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}
