//! Application layer - view state and the events that drive it.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod tool_list;

pub use tool_list::{ToolListPage, ToolListView, ToolRowEditor, ViewSettings};
