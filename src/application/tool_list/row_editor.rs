//! Per-row editor: display/edit toggle with its own draft.

use serde::Serialize;

use crate::domain::foundation::{StateMachine, ToolId, ValidationError, STATE_TRANSITION_FIELD};
use crate::domain::tool::{Tool, ToolDraft, ToolField, ToolPatch};

/// Whether the row shows text or inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowMode {
    Viewing,
    Editing,
}

impl StateMachine for RowMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        self != target
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            RowMode::Viewing => vec![RowMode::Editing],
            RowMode::Editing => vec![RowMode::Viewing],
        }
    }
}

/// Outcome of the row's last confirmed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStatus {
    Idle,
    Pending,
    Committed,
    Failed,
}

impl StateMachine for CommitStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CommitStatus::*;
        matches!(
            (self, target),
            (Idle, Pending)
                | (Committed, Pending)
                | (Failed, Pending)
                | (Pending, Committed)
                | (Pending, Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CommitStatus::*;
        match self {
            Idle | Committed | Failed => vec![Pending],
            Pending => vec![Committed, Failed],
        }
    }
}

/// Update a confirmed row hands to the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowUpdate {
    pub id: ToolId,
    pub patch: ToolPatch,
}

/// Editor state for one displayed tool.
///
/// The draft is what the row displays. It is reset from the parent's tool on
/// close and on a failed commit.
#[derive(Debug, Clone)]
pub struct ToolRowEditor {
    tool: Tool,
    draft: ToolDraft,
    mode: RowMode,
    status: CommitStatus,
}

impl ToolRowEditor {
    pub fn new(tool: Tool) -> Self {
        Self {
            draft: ToolDraft::from_tool(&tool),
            tool,
            mode: RowMode::Viewing,
            status: CommitStatus::Idle,
        }
    }

    pub fn id(&self) -> &ToolId {
        self.tool.id()
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn draft(&self) -> &ToolDraft {
        &self.draft
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn status(&self) -> CommitStatus {
        self.status
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn toggle_edit(&mut self) {
        self.mode = match self.mode {
            RowMode::Viewing => RowMode::Editing,
            RowMode::Editing => RowMode::Viewing,
        };
    }

    /// Edits one draft field.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the row is not in edit mode or the field is `Id`
    pub fn set_field(&mut self, field: ToolField, value: impl Into<String>) -> Result<(), ValidationError> {
        if !self.is_editing() {
            return Err(ValidationError::invalid_format(
                STATE_TRANSITION_FIELD,
                "row is not being edited",
            ));
        }
        self.draft.set(field, value)
    }

    /// Leaves edit mode and discards the draft.
    pub fn on_close(&mut self) {
        self.mode = RowMode::Viewing;
        self.draft = ToolDraft::from_tool(&self.tool);
    }

    /// Leaves edit mode and returns the update to submit, if anything changed.
    ///
    /// The row keeps showing the draft while the update is pending.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the row is not in edit mode or a commit is in flight
    pub fn on_confirm(&mut self) -> Result<Option<RowUpdate>, ValidationError> {
        let mode = self.mode.transition_to(RowMode::Viewing)?;
        let patch = ToolPatch::diff(&self.tool, &self.draft);
        if patch.validate().is_err() {
            self.mode = mode;
            return Ok(None);
        }
        let status = self.status.transition_to(CommitStatus::Pending)?;

        self.mode = mode;
        self.status = status;
        Ok(Some(RowUpdate {
            id: self.tool.id().clone(),
            patch,
        }))
    }

    /// Returns the id to delete, regardless of mode.
    pub fn on_delete_click(&self) -> ToolId {
        self.tool.id().clone()
    }

    /// Replaces the parent's copy. The draft follows unless the row is being edited.
    pub fn sync(&mut self, tool: Tool) {
        self.tool = tool;
        if !self.is_editing() {
            self.draft = ToolDraft::from_tool(&self.tool);
        }
    }

    pub fn commit_succeeded(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(CommitStatus::Committed)?;
        Ok(())
    }

    /// Marks the commit failed and rolls the display back to the parent's values.
    pub fn commit_failed(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(CommitStatus::Failed)?;
        self.draft = ToolDraft::from_tool(&self.tool);
        Ok(())
    }
}
