//! Top navigation bar component.

use leptos::prelude::*;
use leptos_router::components::A;

/// Site-wide navigation bar.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <A href="/">"Dexview"</A>
            </div>
            <div class="nav-links">
                <A href="/">"Catalog"</A>
            </div>
        </nav>
    }
}
