//! Global Score Card Component

use leptos::prelude::*;

use crate::format::{format_score, score_color};
use crate::models::GlobalScore;

/// Large aggregate score on the 0-10 scale.
#[component]
pub fn GlobalScoreCard(score: GlobalScore) -> impl IntoView {
    view! {
        <div class="card global-score-card">
            <h2>"Score Global"</h2>
            <div class=format!("global-score-value {}", score_color(score.score))>
                {format_score(score.score)}
            </div>
        </div>
    }
}
