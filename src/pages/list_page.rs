//! List Page
//!
//! Root view: the first page of todos plus the inline create workflow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{NewTodoForm, TodoTable};
use crate::context::use_todo_service;
use crate::models::FieldUpdate;
use crate::routes;
use crate::store::{
    new_list_store, store_apply, store_draft, store_draft_snapshot, store_draft_visible,
    store_items, ListEvent,
};
use crate::tasks::TaskScope;
use crate::view_model;

#[component]
pub fn ListPage() -> impl IntoView {
    let service = StoredValue::new(use_todo_service());
    let tasks = StoredValue::new(TaskScope::for_current_owner());
    let navigate = StoredValue::new(use_navigate());
    let store = new_list_store();

    // Initial load
    {
        let service = service.get_value();
        let limit = service.config().list_limit;
        tasks.with_value(|tasks| {
            tasks.spawn(async move {
                match view_model::load_initial(&service, limit).await {
                    Ok(event) => store_apply(&store, event),
                    Err(err) => log::error!("Error fetching data: {}", err),
                }
            })
        });
    }

    let on_edit = Callback::new(move |id: i64| {
        let navigate = navigate.get_value();
        navigate(&routes::edit_href(id), Default::default());
    });

    let on_delete = Callback::new(move |(index, id): (usize, i64)| {
        let service = service.get_value();
        tasks.with_value(|tasks| {
            tasks.spawn(async move {
                match view_model::delete_todo(&service, index, id).await {
                    Ok(event) => store_apply(&store, event),
                    Err(err) => log::error!("Error deleting data: {}", err),
                }
            })
        });
    });

    let on_draft_change = Callback::new(move |update: FieldUpdate| {
        store_apply(&store, ListEvent::DraftChanged(update));
    });

    let on_create = Callback::new(move |_: ()| {
        let service = service.get_value();
        let draft = store_draft_snapshot(&store);
        tasks.with_value(|tasks| {
            tasks.spawn(async move {
                match view_model::submit_create(&service, &draft).await {
                    Ok(event) => store_apply(&store, event),
                    Err(err) => log::error!("Error adding data: {}", err),
                }
            })
        });
    });

    let on_cancel = Callback::new(move |_: ()| store_apply(&store, ListEvent::CancelCreate));

    view! {
        <div class="container dashboard">
            <h1>"Dashboard"</h1>

            <TodoTable
                items=Signal::derive(move || store_items(&store))
                on_edit=on_edit
                on_delete=on_delete
            />

            <Show
                when=move || store_draft_visible(&store)
                fallback=move || view! {
                    <button class="add-btn" on:click=move |_| store_apply(&store, ListEvent::BeginCreate)>
                        "Add New"
                    </button>
                }
            >
                <NewTodoForm
                    draft=Signal::derive(move || store_draft(&store))
                    on_change=on_draft_change
                    on_submit=on_create
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
