//! Header Component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <span class="app-logo">"InfoMetrics"</span>
        </header>
    }
}
