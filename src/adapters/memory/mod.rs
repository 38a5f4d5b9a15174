//! In-memory adapters.

mod in_memory_tool_store;

pub use in_memory_tool_store::{InMemoryToolStore, StoreCall};
