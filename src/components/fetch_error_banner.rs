//! Dismissible inline banner for floor/door fetch failures.
//!
//! Dismissal only hides the banner; there is no automatic retry. A refresh
//! action belongs to the surrounding page, not this component.

use leptos::prelude::*;

use crate::state::floor::FloorState;

#[component]
pub fn FetchErrorBanner(floor: RwSignal<FloorState>) -> impl IntoView {
    view! {
        <Show when=move || floor.with(|s| s.fetch_error.is_some())>
            <div class="fetch-error-banner" role="alert">
                <span class="fetch-error-banner__message">
                    {move || floor.with(|s| s.fetch_error.clone().unwrap_or_default())}
                </span>
                <button
                    class="fetch-error-banner__dismiss"
                    on:click=move |_| floor.update(|s| s.dismiss_error())
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
