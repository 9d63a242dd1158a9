//! Landing page.

use leptos::prelude::*;

/// Minimal landing route. Floor views are reached by direct link from the
/// building administration screens, which live outside this application.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Atrium"</h1>
            <p class="home-page__hint">
                "Open a floor via /buildings/{building}/floors/{floor} to view its door map."
            </p>
        </div>
    }
}
