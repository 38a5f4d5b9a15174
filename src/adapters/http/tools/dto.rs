//! HTTP DTOs for the tool list endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::tool::{Tool, ToolError, ToolField};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Create-form submission. Missing inputs submit as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateToolForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

impl CreateToolForm {
    pub fn fields(&self) -> [(ToolField, &str); 3] {
        [
            (ToolField::Title, self.title.as_str()),
            (ToolField::Description, self.description.as_str()),
            (ToolField::Url, self.url.as_str()),
        ]
    }
}

/// Row confirm submission. Only fields present in the form are applied to the draft.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowEditForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RowEditForm {
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
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ToolResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl From<&Tool> for ToolResponse {
    fn from(tool: &Tool) -> Self {
        Self {
            id: tool.id().to_string(),
            title: tool.title().to_string(),
            description: tool.description().to_string(),
            url: tool.url().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolListResponse {
    pub items: Vec<ToolResponse>,
    pub total: usize,
}

impl ToolListResponse {
    pub fn from_tools(tools: &[Tool]) -> Self {
        Self {
            items: tools.iter().map(ToolResponse::from).collect(),
            total: tools.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub mounted: bool,
}

/// Error body for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
        }
    }
}

impl From<&ToolError> for ErrorResponse {
    fn from(error: &ToolError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ToolId, ValidationError};

    #[test]
    fn create_form_defaults_missing_inputs_to_empty() {
        let form: CreateToolForm = serde_json::from_str(r#"{"title":"Hammer"}"#).unwrap();
        assert_eq!(form.title, "Hammer");
        assert_eq!(form.description, "");
        assert_eq!(form.url, "");
        assert_eq!(form.fields().len(), 3);
    }

    #[test]
    fn row_form_only_reports_present_fields() {
        let form: RowEditForm = serde_json::from_str(r#"{"url":"https://x"}"#).unwrap();
        assert_eq!(form.fields(), vec![(ToolField::Url, "https://x")]);
    }

    #[test]
    fn tool_list_response_keeps_order() {
        let tools = vec![
            Tool::new(ToolId::new("a").unwrap(), "T1", "D1", "u1"),
            Tool::new(ToolId::new("b").unwrap(), "T2", "D2", "u2"),
        ];
        let response = ToolListResponse::from_tools(&tools);
        assert_eq!(response.total, 2);
        assert_eq!(response.items[0].id, "a");
        assert_eq!(response.items[1].title, "T2");
    }

    #[test]
    fn error_response_internal_uses_internal_code() {
        let error = ErrorResponse::internal("Failed to render page");
        assert_eq!(error.code, "INTERNAL_ERROR");
        assert_eq!(error.message, "Failed to render page");
    }

    #[test]
    fn error_response_from_tool_error_uses_error_code() {
        let error = ToolError::Validation(ValidationError::empty_field("patch"));
        let response = ErrorResponse::from(&error);
        assert_eq!(response.code, "VALIDATION_FAILED");
    }
}
