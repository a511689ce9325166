//! Todo Table Component
//!
//! Table of loaded todos with per-row edit and delete triggers. Rows are
//! keyed by position and content: the demo service echoes the same id for
//! every created item, so the id alone is not unique.

use leptos::prelude::*;

use crate::models::TodoItem;

/// Identity of a rendered row
fn row_key(index: usize, todo: &TodoItem) -> (usize, TodoItem) {
    (index, todo.clone())
}

#[component]
pub fn TodoTable(
    #[prop(into)] items: Signal<Vec<TodoItem>>,
    on_edit: Callback<i64>,
    on_delete: Callback<(usize, i64)>,
) -> impl IntoView {
    view! {
        <table class="todo-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"User ID"</th>
                    <th>"Title"</th>
                    <th>"Completed"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.get().into_iter().enumerate()
                    key=|(index, todo)| row_key(*index, todo)
                    children=move |(index, todo)| {
                        view! { <TodoRow index=index todo=todo on_edit=on_edit on_delete=on_delete /> }
                    }
                />
            </tbody>
        </table>
    }
}

/// A single todo row
#[component]
fn TodoRow(
    index: usize,
    todo: TodoItem,
    on_edit: Callback<i64>,
    on_delete: Callback<(usize, i64)>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed_label();

    view! {
        <tr class="todo-row">
            <td>{id}</td>
            <td>{todo.user_id}</td>
            <td>{todo.title}</td>
            <td>{completed}</td>
            <td>
                <div class="row-actions">
                    <button class="edit-btn" on:click=move |_| on_edit.run(id)>"Edit"</button>
                    <button class="delete-btn" on:click=move |_| on_delete.run((index, id))>"Delete"</button>
                </div>
            </td>
        </tr>
    }
}
