//! Actions Page
//!
//! Audit items to remediate, either as the 4-level hierarchy or as a flat
//! category-grouped list. Expansion state lives here so switching modes or
//! refetching does not collapse the tree.

use leptos::prelude::*;

use crate::components::{ActionsList, AuditTree, ErrorMessage, LoadingSpinner, TreeExpansion};
use crate::models::Action;
use crate::queries::{use_query_client, QueryState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionsView {
    Hierarchy,
    Categories,
}

#[component]
pub fn Actions() -> impl IntoView {
    let client = use_query_client();
    let items = client.audit_items();

    let expansion = TreeExpansion::new();
    let (view_mode, set_view_mode) = signal(ActionsView::Hierarchy);

    let mode_class = move |mode: ActionsView| {
        move || {
            if view_mode.get() == mode { "mode-btn active" } else { "mode-btn" }
        }
    };

    view! {
        <div class="page actions-page">
            <div class="actions-toolbar">
                <h1>"Actions à auditer"</h1>
                <div class="view-mode-bar">
                    <button
                        class=mode_class(ActionsView::Hierarchy)
                        on:click=move |_| set_view_mode.set(ActionsView::Hierarchy)
                    >
                        "Hiérarchie"
                    </button>
                    <button
                        class=mode_class(ActionsView::Categories)
                        on:click=move |_| set_view_mode.set(ActionsView::Categories)
                    >
                        "Catégories"
                    </button>
                </div>
            </div>

            {move || match items.get() {
                QueryState::Loading => view! { <LoadingSpinner/> }.into_any(),
                QueryState::Failed(error) => view! { <ErrorMessage error=error/> }.into_any(),
                QueryState::Ready(items) if items.is_empty() => {
                    view! { <div class="empty-state">"No audit items found"</div> }.into_any()
                }
                QueryState::Ready(items) => {
                    match view_mode.get() {
                        ActionsView::Hierarchy => {
                            view! { <AuditTree items=items expansion=expansion/> }.into_any()
                        }
                        ActionsView::Categories => {
                            let actions: Vec<Action> = items.iter().map(Action::from).collect();
                            view! { <ActionsList actions=actions/> }.into_any()
                        }
                    }
                }
            }}
        </div>
    }
}
