//! Reusable components

mod metric_card;
mod nav;
mod status_badge;

pub use metric_card::MetricCard;
pub use nav::Nav;
pub use status_badge::StatusBadge;
