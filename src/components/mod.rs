//! UI Components
//!
//! Reusable Leptos components.

mod action_card;
mod actions_list;
mod audit_tree;
mod error_message;
mod function_score_card;
mod global_score_card;
mod header;
mod kpi_group_card;
mod loading_spinner;
mod navigation;

pub use action_card::ActionCard;
pub use actions_list::ActionsList;
pub use audit_tree::{AuditTree, TreeExpansion};
pub use error_message::ErrorMessage;
pub use function_score_card::FunctionScoreCard;
pub use global_score_card::GlobalScoreCard;
pub use header::Header;
pub use kpi_group_card::KpiGroupCard;
pub use loading_spinner::LoadingSpinner;
pub use navigation::Navigation;
