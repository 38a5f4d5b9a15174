//! In-memory tool store.
//!
//! Keeps documents in insertion order and generates UUID ids. Used for local
//! development (`store.backend = memory`) and as the store in tests, where
//! failure injection and call recording drive the failure paths.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::ToolId;
use crate::domain::tool::{NewTool, Tool, ToolPatch};
use crate::ports::{StoreError, ToolStore};

/// A call received by the store, recorded for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ListAll,
    Add(NewTool),
    Update(ToolId, ToolPatch),
    Delete(ToolId),
}

/// In-memory implementation of `ToolStore`.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryToolStore::with_tools(vec![tool]);
/// store.set_reject_writes(true);
/// assert!(store.add(&payload).await.is_err());
/// assert_eq!(store.calls().len(), 1);
/// ```
#[derive(Default)]
pub struct InMemoryToolStore {
    documents: RwLock<Vec<Tool>>,
    calls: RwLock<Vec<StoreCall>>,
    unavailable: AtomicBool,
    reject_writes: AtomicBool,
}

impl InMemoryToolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with documents.
    pub fn with_tools(tools: Vec<Tool>) -> Self {
        Self {
            documents: RwLock::new(tools),
            ..Default::default()
        }
    }

    // === Test Helpers ===

    /// Makes `list_all` fail with `Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Makes `add`, `update` and `delete` fail with `Write`.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Returns every call received so far.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns a snapshot of the stored documents.
    pub fn documents(&self) -> Vec<Tool> {
        self.documents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write("writes are rejected"));
        }
        Ok(())
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Tool>>, StoreError> {
        self.documents
            .write()
            .map_err(|_| StoreError::write("document lock poisoned"))
    }
}

#[async_trait]
impl ToolStore for InMemoryToolStore {
    async fn list_all(&self) -> Result<Vec<Tool>, StoreError> {
        self.record(StoreCall::ListAll);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("backend unreachable"));
        }
        self.documents
            .read()
            .map(|docs| docs.clone())
            .map_err(|_| StoreError::unavailable("document lock poisoned"))
    }

    async fn add(&self, tool: &NewTool) -> Result<ToolId, StoreError> {
        self.record(StoreCall::Add(tool.clone()));
        self.check_writable()?;

        let id = ToolId::new(Uuid::new_v4().simple().to_string())
            .map_err(|e| StoreError::write(e.to_string()))?;
        self.write_lock()?.push(Tool::from_new(id.clone(), tool.clone()));
        Ok(id)
    }

    async fn update(&self, id: &ToolId, patch: &ToolPatch) -> Result<(), StoreError> {
        self.record(StoreCall::Update(id.clone(), patch.clone()));
        self.check_writable()?;

        let mut docs = self.write_lock()?;
        let doc = docs
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| StoreError::write(format!("no document with id {}", id)))?;
        doc.apply_patch(patch);
        Ok(())
    }

    async fn delete(&self, id: &ToolId) -> Result<(), StoreError> {
        self.record(StoreCall::Delete(id.clone()));
        self.check_writable()?;

        self.write_lock()?.retain(|t| t.id() != id);
        Ok(())
    }
}
