//! Frontend Models
//!
//! Data structures matching the remote todo service.

use serde::{Deserialize, Serialize};

/// Todo record as served by the remote service.
///
/// Fields the server leaves out of a reply fall back to their defaults; a
/// create reply only echoes what the draft carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoItem {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    /// Merge one field edit into the form
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::UserId(user_id) => self.user_id = user_id.unwrap_or_default(),
            FieldUpdate::Title(title) => self.title = title,
            FieldUpdate::Completed(completed) => self.completed = completed,
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    pub fn completed_label(&self) -> &'static str {
        if self.completed { "Yes" } else { "No" }
    }
}

/// Partial todo used while composing a new item.
///
/// Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoDraft {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::UserId(user_id) => self.user_id = user_id,
            FieldUpdate::Title(title) => self.title = Some(title),
            FieldUpdate::Completed(completed) => self.completed = Some(completed),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A single typed field edit from a form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// `None` when the number input is emptied
    UserId(Option<i64>),
    Title(String),
    Completed(bool),
}

impl FieldUpdate {
    /// Build a user id update from raw number-input text
    pub fn user_id_input(raw: &str) -> Self {
        FieldUpdate::UserId(raw.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_uses_wire_names() {
        let item: TodoItem = serde_json::from_value(json!({
            "userId": 1, "id": 5, "title": "Buy milk", "completed": false
        }))
        .unwrap();

        assert_eq!(item, TodoItem { id: 5, user_id: 1, title: "Buy milk".into(), completed: false });
        assert_eq!(serde_json::to_value(&item).unwrap()["userId"], json!(1));
    }

    #[test]
    fn test_partial_reply_decodes_with_defaults() {
        let item: TodoItem = serde_json::from_value(json!({ "id": 201, "title": "x" })).unwrap();
        assert_eq!(item, TodoItem { id: 201, user_id: 0, title: "x".into(), completed: false });
    }

    #[test]
    fn test_partial_draft_omits_unset_fields() {
        let mut draft = TodoDraft::default();
        draft.apply(FieldUpdate::Title("x".into()));

        assert_eq!(serde_json::to_value(&draft).unwrap(), json!({ "title": "x" }));
    }

    #[test]
    fn test_draft_merge_and_clear() {
        let mut draft = TodoDraft::default();
        draft.apply(FieldUpdate::UserId(Some(7)));
        draft.apply(FieldUpdate::Completed(true));
        draft.apply(FieldUpdate::user_id_input(""));

        assert_eq!(draft.user_id, None);
        assert_eq!(draft.completed, Some(true));

        draft.clear();
        assert_eq!(draft, TodoDraft::default());
    }

    #[test]
    fn test_item_field_edits() {
        let mut item = TodoItem { id: 5, user_id: 1, title: "Buy milk".into(), completed: false };
        item.apply(FieldUpdate::Title("Buy bread".into()));
        item.toggle_completed();

        assert_eq!(item.title, "Buy bread");
        assert!(item.completed);
        assert_eq!(item.completed_label(), "Yes");
        assert_eq!(item.id, 5);
    }

    #[test]
    fn test_user_id_input_parsing() {
        assert_eq!(FieldUpdate::user_id_input("12"), FieldUpdate::UserId(Some(12)));
        assert_eq!(FieldUpdate::user_id_input("abc"), FieldUpdate::UserId(None));
    }
}
