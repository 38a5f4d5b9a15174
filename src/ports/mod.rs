//! Ports - Interfaces for external dependencies.
//!
//! Ports define the contracts between the application and the outside world.
//! Adapters implement these ports.
//!
//! - `ToolStore` - The remote document collection holding the tools

mod tool_store;

pub use tool_store::{StoreError, ToolStore};
