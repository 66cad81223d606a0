//! Console pages

mod dashboard;
mod new_scan;
mod results;

pub use dashboard::DashboardPage;
pub use new_scan::NewScanPage;
pub use results::ResultsPage;
