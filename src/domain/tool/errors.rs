//! Tool-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ToolId, ValidationError, STATE_TRANSITION_FIELD};
use crate::ports::StoreError;

/// Failures of the tool list operations.
///
/// Every backend cause collapses into the variant of the operation that hit it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// Initial list fetch failed.
    #[error("Failed to fetch tools: {0}")]
    Fetch(#[source] StoreError),

    /// Create-form submission failed.
    #[error("Failed to create tool: {0}")]
    Create(#[source] StoreError),

    /// Row update failed.
    #[error("Failed to update tool {id}: {source}")]
    Update { id: ToolId, source: StoreError },

    /// Row delete failed.
    #[error("Failed to delete tool {id}: {source}")]
    Delete { id: ToolId, source: StoreError },

    /// No row with this id is displayed.
    #[error("Tool not found: {0}")]
    UnknownRow(ToolId),

    /// A failed create switched the page to its fallback; no further events apply.
    #[error("Page is showing the fallback view")]
    Fallback,

    /// Input could not be applied.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl ToolError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ToolError::Fetch(_) => ErrorCode::StoreUnavailable,
            ToolError::Create(_) | ToolError::Update { .. } | ToolError::Delete { .. } => {
                ErrorCode::StoreWriteFailed
            }
            ToolError::UnknownRow(_) => ErrorCode::ToolNotFound,
            ToolError::Fallback => ErrorCode::InvalidStateTransition,
            ToolError::Validation(e) if e.field() == STATE_TRANSITION_FIELD => {
                ErrorCode::InvalidStateTransition
            }
            ToolError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}
