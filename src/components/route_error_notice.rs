//! Route Error Notice Component

use leptos::prelude::*;

use crate::edit_form::RouteIdError;

/// Terminal message for an unusable edit route
#[component]
pub fn RouteErrorNotice(error: RouteIdError) -> impl IntoView {
    view! {
        <div class="route-error">
            <p>{error.to_string()}</p>
        </div>
    }
}
