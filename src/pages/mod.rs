//! Pages
//!
//! One module per routed view.

mod actions;
mod dashboard;
mod kpi_list;

pub use actions::Actions;
pub use dashboard::Dashboard;
pub use kpi_list::KpiList;
