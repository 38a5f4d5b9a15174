//! HTTP adapters - the tool list page and its JSON endpoints.

mod server;
pub mod tools;

pub use server::build_app;
pub use tools::{tool_shelf_router, PageRenderer, ToolShelfState};
