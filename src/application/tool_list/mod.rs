//! Tool list page: the list view, its row editors and their notifications.

mod page;
mod row_editor;
mod toast;
mod view;

pub use page::{ReadyPage, RowView, ToolListPage, TABLE_HEADERS};
pub use row_editor::{CommitStatus, RowMode, RowUpdate, ToolRowEditor};
pub use toast::{Toast, ToastKind, ToastOptions, ToastPosition, ToastQueue, ToastTheme};
pub use view::{ToolListView, ViewSettings, DELETED_MESSAGE, SAVED_MESSAGE, UPDATED_MESSAGE};
