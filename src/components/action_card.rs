//! Action Card Component
//!
//! One remediation action with its three-state workflow select. A status
//! change is pushed to the backend; on success the audit-items cache is
//! invalidated, on failure the error is logged and the displayed status
//! reverts to the last fetched value on the next render. No retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiResult;
use crate::models::{Action, ActionStatus};
use crate::queries::use_query_client;

/// Only a successful update touches the cache. A failure leaves the last
/// fetched value in place, so the displayed status reverts on re-render.
fn applies_to_cache(result: &ApiResult<()>) -> bool {
    result.is_ok()
}

#[component]
pub fn ActionCard(action: Action) -> impl IntoView {
    let client = use_query_client();
    let id = action.id.clone();
    let current = action.status;

    let (glyph, glyph_class) = match current {
        ActionStatus::Completed => ("✓", "status-icon completed"),
        ActionStatus::InProgress => ("◷", "status-icon in-progress"),
        ActionStatus::NotStarted => ("!", "status-icon not-started"),
    };

    let on_change = move |ev| {
        let status = ActionStatus::from_label(&event_target_value(&ev));
        let item_id = id.clone();
        spawn_local(async move {
            let result = api::update_audit_item_status(&item_id, status).await;
            if applies_to_cache(&result) {
                client.invalidate_audit_items();
            }
            if let Err(err) = result {
                web_sys::console::error_1(&format!("Failed to update status: {}", err).into());
            }
        });
    };

    view! {
        <div class="action-card">
            <div class="action-info">
                <h4>{action.name.clone()}</h4>
                {action
                    .sub_problem
                    .clone()
                    .map(|sub| view! { <p class="action-sub-problem">{sub}</p> })}
            </div>
            <div class="action-status">
                <select on:change=on_change prop:value=current.label()>
                    {ActionStatus::ALL
                        .iter()
                        .map(|status| {
                            view! {
                                <option value=status.label() selected={*status == current}>
                                    {status.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <span class=glyph_class>{glyph}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_failed_update_leaves_cache_untouched() {
        let failed: ApiResult<()> =
            Err(ApiError::NotFound("Audit item not found".to_string()));
        assert!(!applies_to_cache(&failed));
    }

    #[test]
    fn test_successful_update_invalidates_cache() {
        assert!(applies_to_cache(&Ok(())));
    }
}
