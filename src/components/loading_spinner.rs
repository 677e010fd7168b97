//! Loading Spinner Component

use leptos::prelude::*;

/// Shared pending-state indicator, shown while a query has no result yet.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="spinner"></div>
            <span>"Loading..."</span>
        </div>
    }
}
