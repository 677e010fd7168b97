//! Domain Models
//!
//! Typed entities as consumed by the rest of the app. All coercion from the
//! untyped Airtable payloads happens in the API client; everything here is
//! already well-formed.

use serde::{Deserialize, Serialize};

/// Aggregate score on a 0-10 scale. Replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalScore {
    pub score: f64,
}

/// Per-function score summary. `alert_kpis <= total_kpis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionScore {
    pub name: String,
    pub final_score: f64,
    pub total_kpis: u32,
    pub alert_kpis: u32,
}

/// A single KPI row, sorted by (type, name) on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: String,
    pub name: String,
    pub kpi_type: String,
    pub current_value: f64,
    pub final_score: f64,
    pub status: String,
    pub function_label: String,
}

/// Remediation workflow status, three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl ActionStatus {
    pub const ALL: [ActionStatus; 3] = [
        ActionStatus::NotStarted,
        ActionStatus::InProgress,
        ActionStatus::Completed,
    ];

    /// Wire/display label, as stored in the `Status` field.
    pub fn label(self) -> &'static str {
        match self {
            ActionStatus::NotStarted => "Not Started",
            ActionStatus::InProgress => "In Progress",
            ActionStatus::Completed => "Completed",
        }
    }

    /// Parse a backend label. Unknown values fall back to `NotStarted`.
    pub fn from_label(value: &str) -> Self {
        match value {
            "In Progress" => ActionStatus::InProgress,
            "Completed" => ActionStatus::Completed,
            _ => ActionStatus::NotStarted,
        }
    }
}

/// An audit problem record flagged for remediation review. Owned by the
/// backend; the client only reads rows and updates `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditItem {
    pub id: String,
    pub name: String,
    pub audit_flag: String,
    pub function_name: String,
    pub problem_name: String,
    pub sub_problem_name: String,
    pub category_name: String,
    pub status: ActionStatus,
}

/// View-model projection of an audit item for the flat actions list.
/// Empty hierarchy fields become `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub id: String,
    pub name: String,
    pub sub_problem: Option<String>,
    pub category: Option<String>,
    pub status: ActionStatus,
}

impl From<&AuditItem> for Action {
    fn from(item: &AuditItem) -> Self {
        let non_empty = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        Action {
            id: item.id.clone(),
            name: item.name.clone(),
            sub_problem: non_empty(&item.sub_problem_name),
            category: non_empty(&item.category_name),
            status: item.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audit_item(id: &str) -> AuditItem {
        AuditItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            audit_flag: "To Audit".to_string(),
            function_name: "Finance".to_string(),
            problem_name: "Reporting".to_string(),
            sub_problem_name: String::new(),
            category_name: String::new(),
            status: ActionStatus::NotStarted,
        }
    }

    #[test]
    fn test_status_label_round_trip() {
        for status in ActionStatus::ALL {
            assert_eq!(ActionStatus::from_label(status.label()), status);
        }
    }

    #[test]
    fn test_unknown_status_defaults_to_not_started() {
        assert_eq!(ActionStatus::from_label("Done"), ActionStatus::NotStarted);
        assert_eq!(ActionStatus::from_label(""), ActionStatus::NotStarted);
    }

    #[test]
    fn test_action_projection_maps_empty_fields_to_none() {
        let action = Action::from(&audit_item("rec1"));
        assert_eq!(action.id, "rec1");
        assert_eq!(action.sub_problem, None);
        assert_eq!(action.category, None);

        let mut item = audit_item("rec2");
        item.sub_problem_name = "Late close".to_string();
        item.category_name = "Process".to_string();
        let action = Action::from(&item);
        assert_eq!(action.sub_problem.as_deref(), Some("Late close"));
        assert_eq!(action.category.as_deref(), Some("Process"));
    }
}
