//! Pages
//!
//! Route-level views.

mod list_page;
mod edit_page;

pub use list_page::ListPage;
pub use edit_page::EditPage;
