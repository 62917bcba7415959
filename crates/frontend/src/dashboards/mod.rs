pub mod d404_labour_summary;

pub use d404_labour_summary::ui::LabourSummaryDashboard;
