//! Edit Page
//!
//! Loads one todo by route id, edits title and completion, and pushes the
//! whole record back.

use leptos::prelude::*;
use leptos::Params;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

use crate::components::RouteErrorNotice;
use crate::context::use_todo_service;
use crate::edit_form::{self, parse_route_id, EditPhase};
use crate::models::{FieldUpdate, TodoItem};
use crate::routes;
use crate::tasks::TaskScope;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct EditRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn EditPage() -> impl IntoView {
    let params = use_params::<EditRouteParams>();
    let service = StoredValue::new(use_todo_service());
    let tasks = StoredValue::new(TaskScope::for_current_owner());
    let navigate = StoredValue::new(use_navigate());

    let route_id = move || params.get().ok().and_then(|p| p.id);
    let initial = parse_route_id(params.get_untracked().ok().and_then(|p| p.id).as_deref());

    let (form, set_form) = signal(TodoItem::default());
    let (phase, set_phase) = signal(EditPhase::for_route(&initial));
    let (todo_id, set_todo_id) = signal(initial.ok());

    // (Re)load whenever the route id changes
    Effect::new(move |_| {
        let raw = route_id();
        tasks.with_value(|tasks| tasks.cancel_pending());
        let parsed = parse_route_id(raw.as_deref());
        set_form.set(TodoItem::default());
        set_phase.set(EditPhase::for_route(&parsed));
        set_todo_id.set(parsed.ok());

        let service = service.get_value();
        tasks.with_value(|tasks| {
            tasks.spawn(async move {
                let opened = edit_form::open_route(&service, raw.as_deref()).await;
                set_todo_id.set(opened.id);
                set_form.set(opened.form);
                set_phase.set(opened.phase);
            })
        });
    });

    let on_submit = Callback::new(move |_: ()| {
        if phase.with_untracked(EditPhase::is_terminal) {
            return;
        }
        let Some(id) = todo_id.get_untracked() else {
            return;
        };
        let todo = form.get_untracked();
        let service = service.get_value();
        set_phase.update(|phase| *phase = phase.clone().submitting());

        tasks.with_value(|tasks| {
            tasks.spawn(async move {
                match edit_form::submit_update(&service, id, &todo).await {
                    Ok(updated) => {
                        log::info!("Todo updated successfully: {:?}", updated);
                        set_phase.update(|phase| *phase = phase.clone().submitted(true));
                        let navigate = navigate.get_value();
                        navigate(routes::ROOT, Default::default());
                    }
                    Err(err) => {
                        log::error!("Error updating data: {}", err);
                        set_phase.update(|phase| *phase = phase.clone().submitted(false));
                    }
                }
            })
        });
    });

    let rejection = Memo::new(move |_| match phase.get() {
        EditPhase::Rejected(err) => Some(err),
        _ => None,
    });

    view! {
        {move || match rejection.get() {
            Some(err) => view! { <RouteErrorNotice error=err /> }.into_any(),
            None => view! { <EditForm todo_id=todo_id form=form set_form=set_form phase=phase on_submit=on_submit /> }.into_any(),
        }}
    }
}

/// Title and completion form for a loaded todo
#[component]
fn EditForm(
    todo_id: ReadSignal<Option<i64>>,
    form: ReadSignal<TodoItem>,
    set_form: WriteSignal<TodoItem>,
    phase: ReadSignal<EditPhase>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="container edit-page">
            <h1>{move || format!("Edit Data - ID: {}", todo_id.get().unwrap_or_default())}</h1>
            <h2>{move || format!("User ID: {}", form.get().user_id)}</h2>

            <Show when=move || phase.get() == EditPhase::Loading>
                <p class="loading-hint">"Loading..."</p>
            </Show>

            <form class="edit-form" on:submit=submit>
                <div class="form-row">
                    <label>"Title:"</label>
                    <input
                        type="text"
                        name="title"
                        prop:value=move || form.get().title
                        on:input=move |ev| {
                            let title = event_target_value(&ev);
                            set_form.update(|todo| todo.apply(FieldUpdate::Title(title)));
                        }
                    />
                </div>

                <div class="form-row checkbox-row">
                    <label>"Completed:"</label>
                    <input
                        type="checkbox"
                        name="completed"
                        prop:checked=move || form.get().completed
                        on:change=move |_| set_form.update(|todo| todo.toggle_completed())
                    />
                </div>

                <button type="submit" class="primary-btn">"Update Todo"</button>
            </form>
        </div>
    }
}
