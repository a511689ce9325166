//! List Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations go
//! through `TodoListState::apply` so the reconciliation rules stay testable
//! without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FieldUpdate, TodoDraft, TodoItem};

/// List page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoListState {
    /// Items in display order, as received
    pub items: Vec<TodoItem>,
    /// Whether the inline create form is shown
    pub draft_visible: bool,
    /// Unsaved create payload
    pub draft: TodoDraft,
}

/// State transitions of the list page
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Replace the collection with an already truncated fetch result
    Loaded(Vec<TodoItem>),
    /// Server confirmed deletion of the row at `index`
    Deleted { index: usize, id: i64 },
    /// Server returned the created item
    Created(TodoItem),
    BeginCreate,
    CancelCreate,
    DraftChanged(FieldUpdate),
}

impl TodoListState {
    /// Remove exactly one entry with `id`.
    ///
    /// The demo service hands every created item the same id, so the clicked
    /// row is preferred; if the list shifted meanwhile the first match goes.
    fn remove_row(&mut self, index: usize, id: i64) {
        let position = match self.items.get(index) {
            Some(item) if item.id == id => Some(index),
            _ => self.items.iter().position(|item| item.id == id),
        };
        if let Some(position) = position {
            self.items.remove(position);
        }
    }

    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::Loaded(items) => self.items = items,
            ListEvent::Deleted { index, id } => self.remove_row(index, id),
            ListEvent::Created(item) => {
                self.items.push(item);
                self.draft_visible = false;
                self.draft.clear();
            }
            ListEvent::BeginCreate => {
                self.draft_visible = true;
                self.draft.clear();
            }
            ListEvent::CancelCreate => {
                self.draft_visible = false;
                self.draft.clear();
            }
            ListEvent::DraftChanged(update) => self.draft.apply(update),
        }
    }
}

/// Type alias for the store
pub type TodoListStore = Store<TodoListState>;

/// Fresh store owned by the calling page
pub fn new_list_store() -> TodoListStore {
    Store::new(TodoListState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Apply an event to the store
pub fn store_apply(store: &TodoListStore, event: ListEvent) {
    store.update(|state| state.apply(event));
}

pub fn store_items(store: &TodoListStore) -> Vec<TodoItem> {
    store.items().get()
}

pub fn store_draft(store: &TodoListStore) -> TodoDraft {
    store.draft().get()
}

/// Current draft without subscribing, for event handlers
pub fn store_draft_snapshot(store: &TodoListStore) -> TodoDraft {
    store.draft().get_untracked()
}

pub fn store_draft_visible(store: &TodoListStore) -> bool {
    store.draft_visible().get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::make_item;

    fn loaded(count: i64) -> TodoListState {
        let mut state = TodoListState::default();
        state.apply(ListEvent::Loaded((1..=count).map(|id| make_item(id, 1, "t")).collect()));
        state
    }

    #[test]
    fn test_delete_removes_only_matching_id() {
        let mut state = loaded(5);
        state.apply(ListEvent::Deleted { index: 2, id: 3 });

        let ids: Vec<i64> = state.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut state = loaded(3);
        state.apply(ListEvent::Deleted { index: 0, id: 99 });
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn test_delete_duplicate_id_removes_clicked_row_only() {
        let mut state = loaded(1);
        state.apply(ListEvent::Created(make_item(201, 7, "first")));
        state.apply(ListEvent::Created(make_item(201, 7, "second")));

        state.apply(ListEvent::Deleted { index: 2, id: 201 });
        let titles: Vec<&str> = state.items.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["t", "first"]);
    }

    #[test]
    fn test_delete_stale_index_falls_back_to_first_match() {
        let mut state = loaded(4);
        state.apply(ListEvent::Deleted { index: 3, id: 2 });

        let ids: Vec<i64> = state.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_created_item_appended_and_draft_reset() {
        let mut state = loaded(2);
        state.apply(ListEvent::BeginCreate);
        state.apply(ListEvent::DraftChanged(FieldUpdate::Title("x".into())));
        state.apply(ListEvent::Created(make_item(201, 7, "x")));

        assert_eq!(state.items.last().map(|item| item.id), Some(201));
        assert!(!state.draft_visible);
        assert_eq!(state.draft, TodoDraft::default());
    }

    #[test]
    fn test_cancel_then_begin_starts_empty() {
        let mut state = TodoListState::default();
        state.apply(ListEvent::BeginCreate);
        state.apply(ListEvent::DraftChanged(FieldUpdate::UserId(Some(3))));
        state.apply(ListEvent::CancelCreate);
        assert!(!state.draft_visible);

        state.apply(ListEvent::BeginCreate);
        assert!(state.draft_visible);
        assert_eq!(state.draft, TodoDraft::default());
    }

    #[test]
    fn test_loaded_replaces_collection() {
        let mut state = loaded(4);
        state.apply(ListEvent::Loaded(vec![make_item(9, 2, "only")]));
        assert_eq!(state.items, vec![make_item(9, 2, "only")]);
    }
}
