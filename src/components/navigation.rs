//! Navigation Component
//!
//! Tab bar switching between the three views. View switching is a signal,
//! not a URL router.

use leptos::prelude::*;

use crate::app::Page;

const PAGES: &[(Page, &str)] = &[
    (Page::Dashboard, "Dashboard"),
    (Page::Kpis, "KPIs"),
    (Page::Actions, "Actions"),
];

#[component]
pub fn Navigation(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="app-nav">
            {PAGES
                .iter()
                .map(|(target, label)| {
                    let target = *target;
                    let is_active = move || page.get() == target;
                    let tab_class = move || {
                        if is_active() { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| set_page.set(target)>
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
