//! Edit Form Model
//!
//! Route id parsing, the edit page phase machine and its remote calls.

use thiserror::Error;

use crate::api::{ApiResult, TodoService};
use crate::models::TodoItem;

/// Why the edit page refused its route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteIdError {
    #[error("Error: ID is missing.")]
    Missing,
    #[error("Error: Invalid ID.")]
    NotNumeric(String),
}

/// Parse the `:id` route segment as a base-10 integer
pub fn parse_route_id(raw: Option<&str>) -> Result<i64, RouteIdError> {
    match raw {
        None => Err(RouteIdError::Missing),
        Some(raw) if raw.is_empty() => Err(RouteIdError::Missing),
        Some(raw) => raw.parse().map_err(|_| RouteIdError::NotNumeric(raw.to_string())),
    }
}

/// Where the edit page is in its lifecycle.
///
/// `Rejected` and `Navigated` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPhase {
    Loading,
    Ready,
    Submitting,
    Navigated,
    Rejected(RouteIdError),
}

impl EditPhase {
    /// Initial phase for a parsed route id
    pub fn for_route(parsed: &Result<i64, RouteIdError>) -> Self {
        match parsed {
            Ok(_) => EditPhase::Loading,
            Err(err) => EditPhase::Rejected(err.clone()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, EditPhase::Navigated | EditPhase::Rejected(_))
    }

    /// A failed load is logged and leaves the zeroed form editable
    pub fn loaded(self) -> Self {
        match self {
            EditPhase::Loading => EditPhase::Ready,
            other => other,
        }
    }

    pub fn submitting(self) -> Self {
        match self {
            EditPhase::Ready | EditPhase::Loading => EditPhase::Submitting,
            other => other,
        }
    }

    pub fn submitted(self, success: bool) -> Self {
        match (self, success) {
            (EditPhase::Submitting, true) => EditPhase::Navigated,
            (EditPhase::Submitting, false) => EditPhase::Ready,
            (other, _) => other,
        }
    }
}

pub async fn load_todo<S>(service: &S, id: i64) -> ApiResult<TodoItem>
where
    S: TodoService + ?Sized,
{
    service.get(id).await
}

/// State the edit page starts from for one route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOpened {
    pub id: Option<i64>,
    pub phase: EditPhase,
    pub form: TodoItem,
}

/// Parse the raw route id and load the todo only when it is numeric.
///
/// A failed load is logged and leaves the zeroed form editable.
pub async fn open_route<S>(service: &S, raw: Option<&str>) -> EditOpened
where
    S: TodoService + ?Sized,
{
    let parsed = parse_route_id(raw);
    let phase = EditPhase::for_route(&parsed);
    let Ok(id) = parsed else {
        return EditOpened { id: None, phase, form: TodoItem::default() };
    };

    let form = match load_todo(service, id).await {
        Ok(todo) => todo,
        Err(err) => {
            log::error!("Error fetching data: {}", err);
            TodoItem::default()
        }
    };
    EditOpened { id: Some(id), phase: phase.loaded(), form }
}

/// Push the whole form to `/todos/{id}`
pub async fn submit_update<S>(service: &S, id: i64, form: &TodoItem) -> ApiResult<TodoItem>
where
    S: TodoService + ?Sized,
{
    service.update(id, form).await
}
