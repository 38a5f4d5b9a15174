//! Tool store port.
//!
//! Contract over the remote document collection holding the tools.
//! Each call is a single request: no transactions, batching or retries.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ToolId;
use crate::domain::tool::{NewTool, Tool, ToolPatch};

/// Failures reported by a tool store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not be reached or refused to list documents.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected a write.
    #[error("Store write failed: {0}")]
    Write(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }

    pub fn write(message: impl Into<String>) -> Self {
        StoreError::Write(message.into())
    }
}

/// Port for the "tools" document collection.
#[async_trait]
pub trait ToolStore: Send + Sync {
    /// Fetch every document. Order is not guaranteed.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backend cannot be reached
    async fn list_all(&self) -> Result<Vec<Tool>, StoreError>;

    /// Create a document and return its generated id.
    ///
    /// # Errors
    ///
    /// - `Write` on backend rejection
    async fn add(&self, tool: &NewTool) -> Result<ToolId, StoreError>;

    /// Patch only the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// - `Write` if `id` does not exist or the write fails
    async fn update(&self, id: &ToolId, patch: &ToolPatch) -> Result<(), StoreError>;

    /// Remove a document. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// - `Write` if the backend rejects the delete
    async fn delete(&self, id: &ToolId) -> Result<(), StoreError>;
}
