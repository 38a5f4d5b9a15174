//! ToolListView - owns the local tool list, the create form and the row editors.
//!
//! Every operation is one UI event: it runs to completion, remote call
//! included, before the caller dispatches the next one. Once a create has
//! failed the page is the fallback view and every event is refused.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{ToastId, Timestamp, ToolId};
use crate::domain::tool::{Tool, ToolDraft, ToolError, ToolField, ToolPatch};
use crate::ports::ToolStore;

use super::page::{ReadyPage, RowView, ToolListPage, TABLE_HEADERS};
use super::row_editor::{RowUpdate, ToolRowEditor};
use super::toast::{ToastOptions, ToastQueue};

pub const SAVED_MESSAGE: &str = "Saved successfully!";
pub const UPDATED_MESSAGE: &str = "Updated successfully!";
pub const DELETED_MESSAGE: &str = "Deleted successfully!";

/// Presentation settings for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub page_title: String,
    pub toast: ToastOptions,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_title: "TOP PAGE".to_string(),
            toast: ToastOptions::default(),
        }
    }
}

/// The tool list page state.
pub struct ToolListView {
    store: Arc<dyn ToolStore>,
    settings: ViewSettings,
    tools: Vec<Tool>,
    rows: HashMap<ToolId, ToolRowEditor>,
    draft: ToolDraft,
    has_form_error: bool,
    toasts: ToastQueue,
    mounted: bool,
}

impl ToolListView {
    pub fn new(store: Arc<dyn ToolStore>, settings: ViewSettings) -> Self {
        Self {
            store,
            settings,
            tools: Vec::new(),
            rows: HashMap::new(),
            draft: ToolDraft::default(),
            has_form_error: false,
            toasts: ToastQueue::new(),
            mounted: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Local tools in fetch order followed by creation order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn draft(&self) -> &ToolDraft {
        &self.draft
    }

    pub fn has_form_error(&self) -> bool {
        self.has_form_error
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn row(&self, id: &ToolId) -> Option<&ToolRowEditor> {
        self.rows.get(id)
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Loads the collection once. Later calls return without refetching.
    ///
    /// On failure the list stays empty and the view is still considered mounted.
    pub async fn mount(&mut self) -> Result<usize, ToolError> {
        if self.mounted {
            return Ok(self.tools.len());
        }
        self.mounted = true;

        match self.store.list_all().await {
            Ok(tools) => {
                self.rows = tools
                    .iter()
                    .map(|t| (t.id().clone(), ToolRowEditor::new(t.clone())))
                    .collect();
                self.tools = tools;
                tracing::info!(count = self.tools.len(), "Loaded tools");
                Ok(self.tools.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load tools");
                Err(ToolError::Fetch(e))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Create form
    // ─────────────────────────────────────────────────────────────────────────

    pub fn handle_input_change(&mut self, field: ToolField, value: impl Into<String>) -> Result<(), ToolError> {
        self.ensure_interactive()?;
        self.draft.set(field, value)?;
        Ok(())
    }

    /// Creates a tool from the form draft.
    ///
    /// On failure the whole view switches to the fallback page.
    pub async fn handle_form_submit(&mut self) -> Result<ToolId, ToolError> {
        self.ensure_interactive()?;
        let payload = self.draft.to_new_tool();

        match self.store.add(&payload).await {
            Ok(id) => {
                tracing::info!(tool_id = %id, "Created tool");
                self.notify(SAVED_MESSAGE);
                let tool = Tool::from_new(id.clone(), payload);
                self.rows.insert(id.clone(), ToolRowEditor::new(tool.clone()));
                self.tools.push(tool);
                self.draft.clear();
                Ok(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create tool");
                self.has_form_error = true;
                Err(ToolError::Create(e))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Store writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Submits a patch and applies it locally once the store accepts it.
    ///
    /// Failures are logged only.
    pub async fn on_update_tool(&mut self, id: &ToolId, patch: &ToolPatch) -> Result<(), ToolError> {
        self.ensure_interactive()?;
        patch.validate()?;

        if let Err(e) = self.store.update(id, patch).await {
            tracing::error!(tool_id = %id, error = %e, "Failed to update tool");
            return Err(ToolError::Update {
                id: id.clone(),
                source: e,
            });
        }

        self.notify(UPDATED_MESSAGE);
        if let Some(tool) = self.tools.iter_mut().find(|t| t.id() == id) {
            tool.apply_patch(patch);
            if let Some(row) = self.rows.get_mut(id) {
                row.sync(tool.clone());
            }
        }
        Ok(())
    }

    /// Deletes a tool and drops it from the local list once the store accepts it.
    ///
    /// Failures are logged only.
    pub async fn on_delete_tool(&mut self, id: &ToolId) -> Result<(), ToolError> {
        self.ensure_interactive()?;
        if let Err(e) = self.store.delete(id).await {
            tracing::error!(tool_id = %id, error = %e, "Failed to delete tool");
            return Err(ToolError::Delete {
                id: id.clone(),
                source: e,
            });
        }

        self.notify(DELETED_MESSAGE);
        self.tools.retain(|t| t.id() != id);
        self.rows.remove(id);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Row events
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_row_edit(&mut self, id: &ToolId) -> Result<(), ToolError> {
        self.row_mut(id)?.toggle_edit();
        Ok(())
    }

    pub fn change_row_field(
        &mut self,
        id: &ToolId,
        field: ToolField,
        value: impl Into<String>,
    ) -> Result<(), ToolError> {
        self.row_mut(id)?.set_field(field, value)?;
        Ok(())
    }

    pub fn close_row(&mut self, id: &ToolId) -> Result<(), ToolError> {
        self.row_mut(id)?.on_close();
        Ok(())
    }

    /// Confirms a row edit and settles the row's commit status.
    pub async fn confirm_row(&mut self, id: &ToolId) -> Result<(), ToolError> {
        let Some(RowUpdate { id, patch }) = self.row_mut(id)?.on_confirm()? else {
            return Ok(());
        };

        let result = self.on_update_tool(&id, &patch).await;
        if let Some(row) = self.rows.get_mut(&id) {
            match &result {
                Ok(()) => row.commit_succeeded()?,
                Err(_) => row.commit_failed()?,
            }
        }
        result
    }

    pub async fn delete_row(&mut self, id: &ToolId) -> Result<(), ToolError> {
        let id = self.row_mut(id)?.on_delete_click();
        self.on_delete_tool(&id).await
    }

    /// Resolves a row for an event.
    fn row_mut(&mut self, id: &ToolId) -> Result<&mut ToolRowEditor, ToolError> {
        self.ensure_interactive()?;
        self.rows
            .get_mut(id)
            .ok_or_else(|| ToolError::UnknownRow(id.clone()))
    }

    fn ensure_interactive(&self) -> Result<(), ToolError> {
        if self.has_form_error {
            return Err(ToolError::Fallback);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications and rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn notify(&mut self, message: &str) {
        self.toasts
            .push_success(message, &self.settings.toast, Timestamp::now());
    }

    pub fn dismiss_toast(&mut self, id: &ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    /// Builds the page, dropping toasts that have timed out.
    pub fn render(&mut self, now: Timestamp) -> ToolListPage {
        if self.has_form_error {
            return ToolListPage::Fallback;
        }
        self.toasts.prune(&now);

        let rows = self
            .tools
            .iter()
            .filter_map(|t| self.rows.get(t.id()))
            .map(RowView::from)
            .collect();

        ToolListPage::Ready(ReadyPage {
            title: self.settings.page_title.clone(),
            form: self.draft.clone(),
            headers: TABLE_HEADERS,
            rows,
            toasts: self.toasts.active().to_vec(),
            toast_options: self.settings.toast.clone(),
        })
    }
}
