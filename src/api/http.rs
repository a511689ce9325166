//! HTTP Todo Service
//!
//! `TodoService` over `gloo-net` fetch requests.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, Operation, TodoService};
use crate::config::ServiceConfig;
use crate::models::{TodoDraft, TodoItem};

#[derive(Debug, Clone)]
pub struct HttpTodoService {
    config: ServiceConfig,
}

impl HttpTodoService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Reject non-2xx responses
fn ensure_success(operation: Operation, response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::request_failed(
            operation,
            format!("HTTP {} {}", response.status(), response.status_text()),
        ))
    }
}

async fn decode<T: DeserializeOwned>(operation: Operation, response: Response) -> ApiResult<T> {
    let response = ensure_success(operation, response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::request_failed(operation, e))
}

#[async_trait(?Send)]
impl TodoService for HttpTodoService {
    async fn list(&self) -> ApiResult<Vec<TodoItem>> {
        let op = Operation::List;
        let response = Request::get(&self.config.todos_url())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(op, e))?;
        decode(op, response).await
    }

    async fn get(&self, id: i64) -> ApiResult<TodoItem> {
        let op = Operation::Get;
        let response = Request::get(&self.config.todo_url(id))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(op, e))?;
        decode(op, response).await
    }

    async fn create(&self, draft: &TodoDraft) -> ApiResult<TodoItem> {
        let op = Operation::Create;
        let response = Request::post(&self.config.todos_url())
            .json(draft)
            .map_err(|e| ApiError::request_failed(op, e))?
            .send()
            .await
            .map_err(|e| ApiError::request_failed(op, e))?;
        decode(op, response).await
    }

    async fn update(&self, id: i64, item: &TodoItem) -> ApiResult<TodoItem> {
        let op = Operation::Update;
        let response = Request::put(&self.config.todo_url(id))
            .json(item)
            .map_err(|e| ApiError::request_failed(op, e))?
            .send()
            .await
            .map_err(|e| ApiError::request_failed(op, e))?;
        decode(op, response).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let op = Operation::Delete;
        let response = Request::delete(&self.config.todo_url(id))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(op, e))?;
        // Body is an empty object; nothing to decode
        ensure_success(op, response).map(|_| ())
    }
}
