//! Diagnostics Panel Component
//!
//! Collapsible view of the most recent log lines kept by the rolling logger.

use leptos::prelude::*;

use crate::context::use_log_history;

#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let Some(history) = use_log_history() else {
        return ().into_any();
    };
    let (lines, set_lines) = signal(history.lines());

    view! {
        <details class="diagnostics">
            <summary>"Diagnostics"</summary>
            <div class="diagnostics-actions">
                <button on:click=move |_| set_lines.set(history.lines())>"Refresh"</button>
                <button
                    on:click=move |_| {
                        history.clear();
                        set_lines.set(Vec::new());
                    }
                >
                    "Clear"
                </button>
            </div>
            <Show
                when=move || !lines.with(Vec::is_empty)
                fallback=|| view! { <p class="diagnostics-empty">"No log lines."</p> }
            >
                <pre class="diagnostics-log">{move || lines.get().join("\n")}</pre>
            </Show>
        </details>
    }
    .into_any()
}
