//! Render model produced by the tool list view.

use serde::Serialize;

use crate::domain::tool::ToolDraft;

use super::row_editor::{CommitStatus, ToolRowEditor};
use super::toast::{Toast, ToastOptions};

/// Column headers of the tool table.
pub const TABLE_HEADERS: [&str; 4] = ["Title", "Description", "Url", "Config"];

/// What the page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ToolListPage {
    /// The whole view is replaced by the not-found page.
    Fallback,
    Ready(ReadyPage),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadyPage {
    pub title: String,
    pub form: ToolDraft,
    pub headers: [&'static str; 4],
    pub rows: Vec<RowView>,
    pub toasts: Vec<Toast>,
    pub toast_options: ToastOptions,
}

/// One table row. Text fields hold the draft, which is what the row displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub editing: bool,
    pub status: CommitStatus,
}

impl From<&ToolRowEditor> for RowView {
    fn from(row: &ToolRowEditor) -> Self {
        let draft = row.draft();
        Self {
            id: row.id().to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            url: draft.url.clone(),
            editing: row.is_editing(),
            status: row.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ToolId;
    use crate::domain::tool::Tool;

    #[test]
    fn row_view_reflects_editor_state() {
        let mut row = ToolRowEditor::new(Tool::new(ToolId::new("a").unwrap(), "T1", "D1", "u1"));
        row.toggle_edit();

        let view = RowView::from(&row);
        assert_eq!(view.id, "a");
        assert_eq!(view.title, "T1");
        assert!(view.editing);
        assert_eq!(view.status, CommitStatus::Idle);
    }

    #[test]
    fn fallback_serializes_with_kind_tag() {
        let json = serde_json::to_value(ToolListPage::Fallback).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "fallback" }));
    }
}
