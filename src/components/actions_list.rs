//! Actions List Component
//!
//! Flat list of actions grouped by category, with "Uncategorized" as the
//! default bucket.

use leptos::prelude::*;

use crate::components::ActionCard;
use crate::grouping::group_actions_by_category;
use crate::models::Action;

#[component]
pub fn ActionsList(actions: Vec<Action>) -> impl IntoView {
    let groups = group_actions_by_category(&actions);

    view! {
        <div class="actions-list">
            {groups
                .into_iter()
                .map(|(category, actions)| {
                    view! {
                        <div class="action-category">
                            <h2>{category}</h2>
                            {actions
                                .into_iter()
                                .map(|action| view! { <ActionCard action=action/> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
