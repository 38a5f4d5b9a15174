//! Tool module - the listed record, its draft and its typed patch.

mod errors;
mod patch;
mod tool;

pub use errors::ToolError;
pub use patch::ToolPatch;
pub use tool::{NewTool, Tool, ToolDraft, ToolField};
