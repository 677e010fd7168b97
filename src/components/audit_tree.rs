//! Audit Tree Component
//!
//! Renders the 4-level audit hierarchy (function, problem, sub-problem,
//! category) as nested expandable sections. Expansion state lives in the
//! owning page so it survives cache refetches.

use leptos::prelude::*;

use crate::components::ActionCard;
use crate::expansion::ExpansionSet;
use crate::grouping::{group_audit_items, GroupNode};
use crate::models::{Action, AuditItem};

/// Category level is the deepest expandable section; its body is the items.
const CATEGORY_DEPTH: usize = 3;

/// One expanded-key set per nesting level.
#[derive(Clone, Copy)]
pub struct TreeExpansion {
    functions: RwSignal<ExpansionSet>,
    problems: RwSignal<ExpansionSet>,
    sub_problems: RwSignal<ExpansionSet>,
    categories: RwSignal<ExpansionSet>,
}

impl TreeExpansion {
    pub fn new() -> Self {
        Self {
            functions: RwSignal::new(ExpansionSet::new()),
            problems: RwSignal::new(ExpansionSet::new()),
            sub_problems: RwSignal::new(ExpansionSet::new()),
            categories: RwSignal::new(ExpansionSet::new()),
        }
    }

    fn level(&self, depth: usize) -> RwSignal<ExpansionSet> {
        match depth {
            0 => self.functions,
            1 => self.problems,
            2 => self.sub_problems,
            _ => self.categories,
        }
    }
}

impl Default for TreeExpansion {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AuditTree(items: Vec<AuditItem>, expansion: TreeExpansion) -> impl IntoView {
    let tree = group_audit_items(&items);

    view! {
        <div class="audit-tree">
            {tree
                .children()
                .iter()
                .map(|(name, node)| tree_section(name.clone(), node.clone(), 0, expansion))
                .collect_view()}
        </div>
    }
}

/// One expandable section. Recursion is over plain functions returning
/// `AnyView` so each depth renders the same way with its own expansion set.
fn tree_section(name: String, node: GroupNode, depth: usize, expansion: TreeExpansion) -> AnyView {
    let level = expansion.level(depth);
    let toggle_key = name.clone();
    let chevron_key = name.clone();
    let body_key = name.clone();

    let body = move || {
        level.get().is_expanded(&body_key).then(|| {
            if depth < CATEGORY_DEPTH {
                node.children()
                    .iter()
                    .map(|(child, child_node)| {
                        tree_section(child.clone(), child_node.clone(), depth + 1, expansion)
                    })
                    .collect_view()
                    .into_any()
            } else {
                node.items()
                    .iter()
                    .map(|item| view! { <ActionCard action=Action::from(item)/> })
                    .collect_view()
                    .into_any()
            }
        })
    };

    view! {
        <div class=format!("tree-section level-{}", depth)>
            <button
                class="tree-toggle"
                on:click=move |_| level.update(|set| set.toggle(&toggle_key))
            >
                <span class="tree-name">{name}</span>
                <span class="chevron">
                    {move || {
                        if level.get().is_expanded(&chevron_key) { "▲" } else { "▼" }
                    }}
                </span>
            </button>
            <div class="tree-body">{body}</div>
        </div>
    }
    .into_any()
}
