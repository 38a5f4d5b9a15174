//! Firestore REST wire types.
//!
//! Only string values are written. On read, any field that is missing or not
//! a string decodes as an empty string.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{ToolId, ValidationError};
use crate::domain::tool::{NewTool, Tool, ToolField, ToolPatch};

/// A single typed Firestore value. Non-string kinds are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirestoreValue {
    #[serde(rename = "stringValue", default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
}

impl FirestoreValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
        }
    }
}

/// Document as sent to and returned by the REST API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirestoreDocument {
    /// Full resource name, `projects/{p}/databases/{d}/documents/{collection}/{id}`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, FirestoreValue>,
}

impl FirestoreDocument {
    pub fn from_new_tool(tool: &NewTool) -> Self {
        let fields = [
            (ToolField::Title, &tool.title),
            (ToolField::Description, &tool.description),
            (ToolField::Url, &tool.url),
        ]
        .into_iter()
        .map(|(field, value)| (field.as_str().to_string(), FirestoreValue::string(value)))
        .collect();

        Self {
            name: String::new(),
            fields,
        }
    }

    pub fn from_patch(patch: &ToolPatch) -> Self {
        let fields = patch
            .fields()
            .into_iter()
            .map(|(field, value)| (field.as_str().to_string(), FirestoreValue::string(value)))
            .collect();

        Self {
            name: String::new(),
            fields,
        }
    }

    /// The document id: last segment of `name`.
    pub fn id(&self) -> Result<ToolId, ValidationError> {
        let id = self.name.rsplit('/').next().unwrap_or_default();
        ToolId::new(id)
    }

    fn text(&self, field: ToolField) -> String {
        self.fields
            .get(field.as_str())
            .and_then(|v| v.string_value.clone())
            .unwrap_or_default()
    }

    pub fn into_tool(self) -> Result<Tool, ValidationError> {
        Ok(Tool::new(
            self.id()?,
            self.text(ToolField::Title),
            self.text(ToolField::Description),
            self.text(ToolField::Url),
        ))
    }
}

/// Response of `GET .../documents/{collection}`.
///
/// An empty collection answers `{}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<FirestoreDocument>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}
