//! Error Message Component

use leptos::prelude::*;

use crate::error::ApiError;

/// Standardized error display for a failed query.
#[component]
pub fn ErrorMessage(error: ApiError) -> impl IntoView {
    view! {
        <div class="error-message">
            <span class="error-icon">"!"</span>
            <p>{error.to_string()}</p>
        </div>
    }
}
