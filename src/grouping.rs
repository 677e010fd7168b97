//! Grouping and Filtering Transforms
//!
//! Pure functions reshaping flat entity lists for display. Buckets keep
//! first-encounter order and items keep input order, so the server-side sort
//! carries through to the screen. Recomputed from the full dataset on every
//! render; datasets are dashboard-scale.

use crate::models::{Action, AuditItem, Kpi};

/// Group KPIs by function label, preserving relative KPI order within each
/// bucket.
pub fn group_by_function(kpis: &[Kpi]) -> Vec<(String, Vec<Kpi>)> {
    let mut groups: Vec<(String, Vec<Kpi>)> = Vec::new();
    for kpi in kpis {
        match groups.iter_mut().find(|(name, _)| *name == kpi.function_label) {
            Some((_, bucket)) => bucket.push(kpi.clone()),
            None => groups.push((kpi.function_label.clone(), vec![kpi.clone()])),
        }
    }
    groups
}

/// Case-insensitive substring filter against KPI name or function label.
/// Buckets with zero matches are dropped. Always applied to the full
/// grouping, so the empty query is the identity and filtering is idempotent.
pub fn filter_groups(groups: &[(String, Vec<Kpi>)], query: &str) -> Vec<(String, Vec<Kpi>)> {
    let needle = query.to_lowercase();
    groups
        .iter()
        .filter_map(|(name, kpis)| {
            let label = name.to_lowercase();
            let matches: Vec<Kpi> = kpis
                .iter()
                .filter(|kpi| {
                    kpi.name.to_lowercase().contains(&needle) || label.contains(&needle)
                })
                .cloned()
                .collect();
            if matches.is_empty() {
                None
            } else {
                Some((name.clone(), matches))
            }
        })
        .collect()
}

/// A level of the audit hierarchy: named child levels plus the items that
/// terminate here. Levels are created on first encounter and both children
/// and items keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupNode {
    children: Vec<(String, GroupNode)>,
    items: Vec<AuditItem>,
}

impl GroupNode {
    /// Walk `path`, creating intermediate levels as needed, and append the
    /// item at the deepest level.
    pub fn insert_at_path(&mut self, path: &[String], item: AuditItem) {
        match path.split_first() {
            None => self.items.push(item),
            Some((key, rest)) => {
                let position = self.children.iter().position(|(name, _)| name == key);
                let index = match position {
                    Some(index) => index,
                    None => {
                        self.children.push((key.clone(), GroupNode::default()));
                        self.children.len() - 1
                    }
                };
                self.children[index].1.insert_at_path(rest, item);
            }
        }
    }

    pub fn children(&self) -> &[(String, GroupNode)] {
        &self.children
    }

    pub fn items(&self) -> &[AuditItem] {
        &self.items
    }
}

/// Group audit items into the 4-level hierarchy:
/// function -> problem -> sub-problem -> category.
pub fn group_audit_items(items: &[AuditItem]) -> GroupNode {
    let mut root = GroupNode::default();
    for item in items {
        let path = [
            item.function_name.clone(),
            item.problem_name.clone(),
            item.sub_problem_name.clone(),
            item.category_name.clone(),
        ];
        root.insert_at_path(&path, item.clone());
    }
    root
}

/// Group actions by category, with absent categories collected under
/// "Uncategorized".
pub fn group_actions_by_category(actions: &[Action]) -> Vec<(String, Vec<Action>)> {
    let mut groups: Vec<(String, Vec<Action>)> = Vec::new();
    for action in actions {
        let category = action.category.as_deref().unwrap_or("Uncategorized");
        match groups.iter_mut().find(|(name, _)| name.as_str() == category) {
            Some((_, bucket)) => bucket.push(action.clone()),
            None => groups.push((category.to_string(), vec![action.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActionStatus;

    fn kpi(name: &str, function: &str) -> Kpi {
        Kpi {
            id: format!("rec-{}", name),
            name: name.to_string(),
            kpi_type: "Financier".to_string(),
            current_value: 1.0,
            final_score: 5.0,
            status: "OK".to_string(),
            function_label: function.to_string(),
        }
    }

    fn audit_item(name: &str, function: &str, problem: &str) -> AuditItem {
        AuditItem {
            id: format!("rec-{}", name),
            name: name.to_string(),
            audit_flag: "To Audit".to_string(),
            function_name: function.to_string(),
            problem_name: problem.to_string(),
            sub_problem_name: "Sub".to_string(),
            category_name: "Cat".to_string(),
            status: ActionStatus::NotStarted,
        }
    }

    fn action(name: &str, category: Option<&str>) -> Action {
        Action {
            id: format!("rec-{}", name),
            name: name.to_string(),
            sub_problem: None,
            category: category.map(str::to_string),
            status: ActionStatus::NotStarted,
        }
    }

    #[test]
    fn test_group_by_function_preserves_multiset() {
        let kpis = vec![
            kpi("Marge", "Finance"),
            kpi("CA", "Ventes"),
            kpi("DSO", "Finance"),
            kpi("Churn", "Ventes"),
        ];
        let groups = group_by_function(&kpis);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Finance");
        assert_eq!(groups[1].0, "Ventes");

        // Flattening reconstructs every KPI exactly once, in bucket order
        let flattened: Vec<&str> = groups
            .iter()
            .flat_map(|(_, kpis)| kpis.iter().map(|k| k.name.as_str()))
            .collect();
        assert_eq!(flattened, vec!["Marge", "DSO", "CA", "Churn"]);
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let groups = group_by_function(&[kpi("Marge", "Finance"), kpi("CA", "Ventes")]);
        assert_eq!(filter_groups(&groups, ""), groups);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let groups = group_by_function(&[
            kpi("Marge brute", "Finance"),
            kpi("CA", "Ventes"),
            kpi("DSO", "Finance"),
        ]);
        let once = filter_groups(&groups, "marge");
        let twice = filter_groups(&once, "marge");
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].1.len(), 1);
    }

    #[test]
    fn test_filter_matches_function_label_case_insensitive() {
        let groups = group_by_function(&[kpi("Marge", "Finance"), kpi("CA", "Ventes")]);
        let filtered = filter_groups(&groups, "FINANCE");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].0, "Finance");
        // The whole bucket survives when the label matches
        assert_eq!(filtered[0].1.len(), 1);
    }

    #[test]
    fn test_filter_drops_empty_buckets() {
        let groups = group_by_function(&[kpi("Marge", "Finance"), kpi("CA", "Ventes")]);
        let filtered = filter_groups(&groups, "marge");
        assert_eq!(filtered.len(), 1);
        assert!(filter_groups(&groups, "no such kpi").is_empty());
    }

    #[test]
    fn test_audit_hierarchy_two_functions_one_problem_each() {
        let items = vec![
            audit_item("a", "Finance", "Reporting"),
            audit_item("b", "Finance", "Reporting"),
            audit_item("c", "Ventes", "Pipeline"),
            audit_item("d", "Ventes", "Pipeline"),
        ];
        let tree = group_audit_items(&items);

        assert_eq!(tree.children().len(), 2);
        for (_, function_node) in tree.children() {
            assert_eq!(function_node.children().len(), 1);
        }

        // Full depth: function -> problem -> sub-problem -> category -> items
        let (name, finance) = &tree.children()[0];
        assert_eq!(name, "Finance");
        let (_, problem) = &finance.children()[0];
        let (_, sub_problem) = &problem.children()[0];
        let (_, category) = &sub_problem.children()[0];
        assert_eq!(category.items().len(), 2);
        assert_eq!(category.items()[0].name, "a");
        assert_eq!(category.items()[1].name, "b");
    }

    #[test]
    fn test_insertion_is_idempotent_per_level() {
        let items = vec![
            audit_item("a", "Finance", "Reporting"),
            audit_item("b", "Ventes", "Pipeline"),
            audit_item("c", "Finance", "Reporting"),
        ];
        let tree = group_audit_items(&items);
        // Finance is encountered twice but creates one level
        assert_eq!(tree.children().len(), 2);
        let (_, finance) = &tree.children()[0];
        assert_eq!(finance.children().len(), 1);
    }

    #[test]
    fn test_actions_default_bucket_is_uncategorized() {
        let actions = vec![
            action("Fix report", Some("Process")),
            action("Call supplier", None),
            action("Review SLA", Some("Process")),
        ];
        let groups = group_actions_by_category(&actions);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Process");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Uncategorized");
        assert_eq!(groups[1].1.len(), 1);
    }
}
