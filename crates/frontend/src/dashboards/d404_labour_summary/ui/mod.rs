pub mod breadcrumbs;
pub mod dashboard;
pub mod filter_bar;
pub mod level_cards;

pub use dashboard::LabourSummaryDashboard;
