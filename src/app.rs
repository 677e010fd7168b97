//! Application Shell
//!
//! Provides the query client to the whole tree and switches between the
//! three views.

use leptos::prelude::*;

use crate::components::{Header, Navigation};
use crate::pages::{Actions, Dashboard, KpiList};
use crate::queries::QueryClient;

/// The three routed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Kpis,
    Actions,
}

#[component]
pub fn App() -> impl IntoView {
    // Cells live here so page unmounts never drop cached query results
    provide_context(QueryClient::new());

    let (page, set_page) = signal(Page::Dashboard);

    view! {
        <div class="app-shell">
            <Header/>
            <Navigation page=page set_page=set_page/>
            <main class="main-content">
                {move || match page.get() {
                    Page::Dashboard => view! { <Dashboard/> }.into_any(),
                    Page::Kpis => view! { <KpiList/> }.into_any(),
                    Page::Actions => view! { <Actions/> }.into_any(),
                }}
            </main>
        </div>
    }
}
