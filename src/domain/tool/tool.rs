//! Tool record and its editable fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ToolId, ValidationError};

use super::patch::ToolPatch;

/// Addressable fields of a tool.
///
/// `Id` names the document key and is never editable through an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolField {
    Id,
    Title,
    Description,
    Url,
}

impl ToolField {
    /// Returns the document field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolField::Id => "id",
            ToolField::Title => "title",
            ToolField::Description => "description",
            ToolField::Url => "url",
        }
    }
}

impl fmt::Display for ToolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool listed on the page.
///
/// # Invariants
///
/// - `id` is assigned by the store and never changes
/// - text fields carry no length or format constraints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    id: ToolId,
    title: String,
    description: String,
    url: String,
}

impl Tool {
    pub fn new(
        id: ToolId,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// Combines a store-assigned id with the payload it was created from.
    pub fn from_new(id: ToolId, payload: NewTool) -> Self {
        Self {
            id,
            title: payload.title,
            description: payload.description,
            url: payload.url,
        }
    }

    pub fn id(&self) -> &ToolId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Overwrites every field present in the patch.
    pub fn apply_patch(&mut self, patch: &ToolPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(url) = &patch.url {
            self.url = url.clone();
        }
    }
}

/// Payload for creating a tool. The store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTool {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Uncommitted values of the three editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolDraft {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl ToolDraft {
    pub fn from_tool(tool: &Tool) -> Self {
        Self {
            title: tool.title.clone(),
            description: tool.description.clone(),
            url: tool.url.clone(),
        }
    }

    /// Sets one editable field.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` when asked to set `Id`
    pub fn set(&mut self, field: ToolField, value: impl Into<String>) -> Result<(), ValidationError> {
        let slot = match field {
            ToolField::Title => &mut self.title,
            ToolField::Description => &mut self.description,
            ToolField::Url => &mut self.url,
            ToolField::Id => {
                return Err(ValidationError::invalid_format(
                    "field",
                    "id is assigned by the store and cannot be edited",
                ))
            }
        };
        *slot = value.into();
        Ok(())
    }

    pub fn to_new_tool(&self) -> NewTool {
        NewTool {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
