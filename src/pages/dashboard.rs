//! Dashboard Page
//!
//! Global score plus the per-function score grid. The two queries are
//! independent; the page shows a spinner while either is pending and the
//! first error when either failed.

use leptos::prelude::*;

use crate::components::{ErrorMessage, FunctionScoreCard, GlobalScoreCard, LoadingSpinner};
use crate::queries::{use_query_client, QueryState};

#[component]
pub fn Dashboard() -> impl IntoView {
    let client = use_query_client();
    let global_score = client.global_score();
    let function_scores = client.function_scores();

    view! {
        <div class="page dashboard-page">
            {move || match (global_score.get(), function_scores.get()) {
                (QueryState::Loading, _) | (_, QueryState::Loading) => {
                    view! { <LoadingSpinner/> }.into_any()
                }
                (QueryState::Failed(error), _) | (_, QueryState::Failed(error)) => {
                    view! { <ErrorMessage error=error/> }.into_any()
                }
                (QueryState::Ready(score), QueryState::Ready(scores)) => {
                    view! {
                        <div class="dashboard-content">
                            <h1>"Performance Dashboard"</h1>
                            <GlobalScoreCard score=score/>
                            {(!scores.is_empty())
                                .then(|| {
                                    view! {
                                        <h2>"Performance by Function"</h2>
                                        <div class="score-grid">
                                            {scores
                                                .iter()
                                                .map(|score| {
                                                    view! { <FunctionScoreCard score=score.clone()/> }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
