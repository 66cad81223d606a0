//! DAST Console Core
//!
//! This crate provides the domain logic for the DAST console: wire
//! models for the Scan Orchestration Service, pure aggregation of
//! findings into display-ready summaries, report export naming, and
//! the polling decisions of the scan status loop. It performs no I/O.

pub mod export;
pub mod model;
pub mod poll;
pub mod summary;

pub use export::report_filename;
pub use model::{
    display_target, format_timestamp, Finding, ReportFormat, ResultsPayload, ResultsSummary, Risk,
    ScanRecord, ScanState, ScanType, StartScanRequest, StartedScan,
};
pub use poll::{ResultsGate, POLL_INTERVAL};
pub use summary::{severity_breakdown, top_vulnerability_types, DashboardMetrics};
