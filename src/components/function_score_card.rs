//! Function Score Card Component

use leptos::prelude::*;

use crate::format::{format_score, score_color};
use crate::models::FunctionScore;

/// One business function: score plus KPI counts, with a trend glyph at the
/// 7.0 threshold.
#[component]
pub fn FunctionScoreCard(score: FunctionScore) -> impl IntoView {
    let trend = if score.final_score >= 7.0 {
        ("▲", "trend-up")
    } else {
        ("▼", "trend-down")
    };

    view! {
        <div class="card function-score-card">
            <div class="card-header">
                <h3>{score.name.clone()}</h3>
                <span class=trend.1>{trend.0}</span>
            </div>
            <div class="card-row">
                <span class="card-label">"Score"</span>
                <span class=format!("card-score {}", score_color(score.final_score))>
                    {format_score(score.final_score)}
                </span>
            </div>
            <div class="card-row">
                <span class="card-label">"Total KPIs"</span>
                <span>{score.total_kpis}</span>
            </div>
            <div class="card-row">
                <span class="card-label">"En Alerte"</span>
                <span class="alert-count">{score.alert_kpis}</span>
            </div>
        </div>
    }
}
