//! Todo View-Model
//!
//! Remote operations behind the list page. Each returns the `ListEvent` to
//! apply on success; the caller decides what to do with an error.

use crate::api::{ApiResult, TodoService};
use crate::models::TodoDraft;
use crate::store::ListEvent;

/// Fetch the collection and keep the first `limit` items in service order
pub async fn load_initial<S>(service: &S, limit: usize) -> ApiResult<ListEvent>
where
    S: TodoService + ?Sized,
{
    let mut items = service.list().await?;
    items.truncate(limit);
    Ok(ListEvent::Loaded(items))
}

/// Delete the todo shown at row `index`
pub async fn delete_todo<S>(service: &S, index: usize, id: i64) -> ApiResult<ListEvent>
where
    S: TodoService + ?Sized,
{
    service.delete(id).await?;
    Ok(ListEvent::Deleted { index, id })
}

/// Send the draft as-is; the server's echo is what gets listed
pub async fn submit_create<S>(service: &S, draft: &TodoDraft) -> ApiResult<ListEvent>
where
    S: TodoService + ?Sized,
{
    let created = service.create(draft).await?;
    Ok(ListEvent::Created(created))
}
