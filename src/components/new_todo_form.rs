//! New Todo Form Component
//!
//! Inline form for composing a draft todo. Holds no state of its own: every
//! keystroke is reported as a `FieldUpdate`.

use leptos::prelude::*;

use crate::models::{FieldUpdate, TodoDraft};

#[component]
pub fn NewTodoForm(
    #[prop(into)] draft: Signal<TodoDraft>,
    on_change: Callback<FieldUpdate>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="new-todo-panel">
            <form class="new-todo-form" on:submit=submit>
                <div class="form-row">
                    <label for="userId">"User ID:"</label>
                    <input
                        id="userId"
                        type="number"
                        name="userId"
                        prop:value=move || draft.get().user_id.map(|id| id.to_string()).unwrap_or_default()
                        on:input=move |ev| on_change.run(FieldUpdate::user_id_input(&event_target_value(&ev)))
                    />
                </div>

                <div class="form-row">
                    <label for="title">"Title:"</label>
                    <input
                        id="title"
                        type="text"
                        name="title"
                        prop:value=move || draft.get().title.unwrap_or_default()
                        on:input=move |ev| on_change.run(FieldUpdate::Title(event_target_value(&ev)))
                    />
                </div>

                <div class="form-row">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            name="completed"
                            prop:checked=move || draft.get().completed.unwrap_or(false)
                            on:change=move |ev| on_change.run(FieldUpdate::Completed(event_target_checked(&ev)))
                        />
                        <span>"Completed"</span>
                    </label>
                </div>

                <div class="form-actions">
                    <button type="submit" class="primary-btn">"Add"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
