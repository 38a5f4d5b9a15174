//! Typed partial update for a tool.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::tool::{Tool, ToolDraft, ToolField};

/// Changed fields of one update. Absent fields are left untouched by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ToolPatch {
    /// Builds the patch carrying every draft field that differs from `tool`.
    pub fn diff(tool: &Tool, draft: &ToolDraft) -> Self {
        let changed = |current: &str, edited: &str| {
            (current != edited).then(|| edited.to_string())
        };
        Self {
            title: changed(tool.title(), &draft.title),
            description: changed(tool.description(), &draft.description),
            url: changed(tool.url(), &draft.url),
        }
    }

    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.url.is_none()
    }

    /// Present fields with their new values, in display order.
    pub fn fields(&self) -> Vec<(ToolField, &str)> {
        [
            (ToolField::Title, self.title.as_deref()),
            (ToolField::Description, self.description.as_deref()),
            (ToolField::Url, self.url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    /// Checks the patch is worth submitting.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no field is present
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::empty_field("patch"));
        }
        Ok(())
    }
}
