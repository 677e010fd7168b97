//! KPI Group Card Component
//!
//! Expandable card for one function's KPIs.

use leptos::prelude::*;

use crate::expansion::ExpansionSet;
use crate::format::{format_score, score_color};
use crate::models::Kpi;

#[component]
pub fn KpiGroupCard(
    function: String,
    kpis: Vec<Kpi>,
    expanded: RwSignal<ExpansionSet>,
) -> impl IntoView {
    let toggle_key = function.clone();
    let chevron_key = function.clone();
    let body_key = function.clone();
    let count = kpis.len();

    view! {
        <div class="card kpi-group-card">
            <button
                class="group-header"
                on:click=move |_| expanded.update(|set| set.toggle(&toggle_key))
            >
                <h3>{function}</h3>
                <span class="group-count">{count} " KPIs"</span>
                <span class="chevron">
                    {move || {
                        if expanded.get().is_expanded(&chevron_key) { "▲" } else { "▼" }
                    }}
                </span>
            </button>
            {move || {
                expanded.get().is_expanded(&body_key).then(|| {
                    view! {
                        <div class="group-body">
                            {kpis
                                .iter()
                                .map(|kpi| {
                                    let status_class = if kpi.status == "OK" {
                                        "status-badge ok"
                                    } else {
                                        "status-badge alert"
                                    };
                                    view! {
                                        <div class="kpi-row">
                                            <div class="kpi-name">
                                                <span>{kpi.name.clone()}</span>
                                                <span class="kpi-type">{kpi.kpi_type.clone()}</span>
                                            </div>
                                            <div class="kpi-metrics">
                                                <span class="kpi-value">{kpi.current_value}</span>
                                                <span class=format!(
                                                    "kpi-score {}",
                                                    score_color(kpi.final_score),
                                                )>{format_score(kpi.final_score)}</span>
                                                <span class=status_class>{kpi.status.clone()}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
