//! In-memory `TodoService` for tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ApiError, ApiResult, Operation, TodoService};
use crate::models::{TodoDraft, TodoItem};

/// Mimics the demo API: echoes writes, assigns ids from 201 (or always 201),
/// stores nothing beyond its seed list.
pub struct MockTodoService {
    items: Vec<TodoItem>,
    fail: Cell<bool>,
    next_id: Cell<i64>,
    fixed_create_id: Cell<bool>,
    calls: RefCell<Vec<String>>,
}

impl MockTodoService {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            fail: Cell::new(false),
            next_id: Cell::new(201),
            fixed_create_id: Cell::new(false),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Seeded with `count` items, ids 1..=count
    pub fn with_count(count: i64) -> Self {
        Self::new((1..=count).map(|id| make_item(id, 1, &format!("Todo {}", id))).collect())
    }

    pub fn failing(self) -> Self {
        self.fail.set(true);
        self
    }

    /// Every create gets id 201, as the public demo API does
    pub fn with_fixed_create_id(self) -> Self {
        self.fixed_create_id.set(true);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: Operation, detail: impl std::fmt::Display) -> ApiResult<()> {
        self.calls.borrow_mut().push(format!("{} {}", operation, detail));
        if self.fail.get() {
            Err(ApiError::request_failed(operation, "HTTP 500 Internal Server Error"))
        } else {
            Ok(())
        }
    }
}

pub fn make_item(id: i64, user_id: i64, title: &str) -> TodoItem {
    TodoItem { id, user_id, title: title.to_string(), completed: false }
}

#[async_trait(?Send)]
impl TodoService for MockTodoService {
    async fn list(&self) -> ApiResult<Vec<TodoItem>> {
        self.record(Operation::List, "/todos")?;
        Ok(self.items.clone())
    }

    async fn get(&self, id: i64) -> ApiResult<TodoItem> {
        self.record(Operation::Get, id)?;
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| ApiError::request_failed(Operation::Get, "HTTP 404 Not Found"))
    }

    /// Echoes exactly the sent fields plus an id, decoded like a real reply
    async fn create(&self, draft: &TodoDraft) -> ApiResult<TodoItem> {
        self.record(Operation::Create, "/todos")?;
        let id = self.next_id.get();
        if !self.fixed_create_id.get() {
            self.next_id.set(id + 1);
        }
        let mut echo = serde_json::to_value(draft)
            .map_err(|e| ApiError::request_failed(Operation::Create, e))?;
        echo["id"] = serde_json::json!(id);
        serde_json::from_value(echo).map_err(|e| ApiError::request_failed(Operation::Create, e))
    }

    async fn update(&self, id: i64, item: &TodoItem) -> ApiResult<TodoItem> {
        self.record(Operation::Update, id)?;
        Ok(TodoItem { id, ..item.clone() })
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.record(Operation::Delete, id)
    }
}
