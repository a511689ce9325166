//! Todo Dashboard App
//!
//! Router shell mapping paths to pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use rolling_logger::RollingLogger;

use crate::components::DiagnosticsPanel;
use crate::config::ServiceConfig;
use crate::context::{provide_log_history, provide_todo_service};
use crate::pages::{EditPage, ListPage};

/// `logger` is the installed global logger, absent if another was already set
#[component]
pub fn App(logger: Option<&'static RollingLogger>) -> impl IntoView {
    provide_todo_service(ServiceConfig::from_build_env());
    if let Some(logger) = logger {
        provide_log_history(logger);
    }

    view! {
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ListPage />
                    // Vestigial: the add form lives inline on the list page
                    <Route path=path!("/add") view=ListPage />
                    <Route path=path!("/edit/:id?") view=EditPage />
                </Routes>
            </main>
            <DiagnosticsPanel />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Page not found."</p>
        </div>
    }
}
