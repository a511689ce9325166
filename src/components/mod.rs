//! UI Components
//!
//! Reusable Leptos components.

mod todo_table;
mod new_todo_form;
mod route_error_notice;
mod diagnostics_panel;

pub use todo_table::TodoTable;
pub use new_todo_form::NewTodoForm;
pub use route_error_notice::RouteErrorNotice;
pub use diagnostics_panel::DiagnosticsPanel;
