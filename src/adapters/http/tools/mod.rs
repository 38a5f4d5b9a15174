//! Tool list HTTP adapter - server-rendered page plus a small JSON API.

mod dto;
mod handlers;
mod page;
mod routes;

pub use dto::{
    CreateToolForm, ErrorResponse, HealthResponse, RowEditForm, ToolListResponse, ToolResponse,
};
pub use handlers::ToolShelfState;
pub use page::{PageRenderer, RenderError};
pub use routes::tool_shelf_router;
