//! KPI List Page
//!
//! Function-grouped KPI cards with a debounced search filter and an
//! expand/collapse-all toggle. Grouping and filtering are recomputed from
//! the full dataset whenever the data or the query changes.

use leptos::prelude::*;

use crate::components::{ErrorMessage, KpiGroupCard, LoadingSpinner};
use crate::expansion::ExpansionSet;
use crate::grouping::{filter_groups, group_by_function};
use crate::hooks::use_debounced;
use crate::queries::{use_query_client, QueryState};

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn KpiList() -> impl IntoView {
    let client = use_query_client();
    let kpis = client.kpis();

    let (search, set_search) = signal(String::new());
    let debounced = use_debounced(search, SEARCH_DEBOUNCE_MS);
    let expanded = RwSignal::new(ExpansionSet::new());

    let filtered = Memo::new(move |_| match kpis.get() {
        QueryState::Ready(list) => filter_groups(&group_by_function(&list), &debounced.get()),
        _ => Vec::new(),
    });
    let group_keys = move || {
        filtered
            .get()
            .iter()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>()
    };

    let toggle_all_label = move || {
        let keys = group_keys();
        if !keys.is_empty() && expanded.get().len() == keys.len() {
            "Tout réduire"
        } else {
            "Tout développer"
        }
    };

    view! {
        <div class="page kpi-page">
            <div class="kpi-toolbar">
                <h1>"Liste des KPIs"</h1>
                <button
                    class="toggle-all-btn"
                    on:click=move |_| expanded.update(|set| set.toggle_all(&group_keys()))
                >
                    {toggle_all_label}
                </button>
            </div>

            <input
                class="kpi-search"
                type="text"
                placeholder="Rechercher un KPI ou une fonction..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />

            {move || match kpis.get() {
                QueryState::Loading => view! { <LoadingSpinner/> }.into_any(),
                QueryState::Failed(error) => view! { <ErrorMessage error=error/> }.into_any(),
                QueryState::Ready(_) => {
                    view! {
                        <div class="kpi-groups">
                            {filtered
                                .get()
                                .into_iter()
                                .map(|(function, kpis)| {
                                    view! {
                                        <KpiGroupCard
                                            function=function
                                            kpis=kpis
                                            expanded=expanded
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
