//! Todo Service Client
//!
//! Abstract interface to the remote todo resource, organized like the
//! backend repository traits: one async method per remote operation.

mod http;
#[cfg(test)]
pub mod testing;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{TodoDraft, TodoItem};

pub use http::HttpTodoService;

/// Remote call that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Failure at the network boundary.
///
/// Connectivity problems, non-2xx statuses and undecodable bodies are not
/// told apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{operation} request failed: {reason}")]
    RequestFailed { operation: Operation, reason: String },
}

impl ApiError {
    pub fn request_failed(operation: Operation, reason: impl fmt::Display) -> Self {
        ApiError::RequestFailed { operation, reason: reason.to_string() }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote todo resource
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TodoService {
    /// `GET /todos`
    async fn list(&self) -> ApiResult<Vec<TodoItem>>;

    /// `GET /todos/{id}`
    async fn get(&self, id: i64) -> ApiResult<TodoItem>;

    /// `POST /todos`, echoes the created item
    async fn create(&self, draft: &TodoDraft) -> ApiResult<TodoItem>;

    /// `PUT /todos/{id}`, echoes the updated item
    async fn update(&self, id: i64, item: &TodoItem) -> ApiResult<TodoItem>;

    /// `DELETE /todos/{id}`
    async fn delete(&self, id: i64) -> ApiResult<()>;
}
