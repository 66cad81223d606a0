//! Polling decisions for the scan status loop
//!
//! The console polls the orchestration service for one scan at a time.
//! The loop itself lives in the console crate next to the network
//! calls; the decisions it makes each tick are pure and live here.

use crate::model::ScanState;
use std::time::Duration;

/// Delay between a settled status fetch and the next one. The timer is
/// re-armed after each fetch completes, so in-flight latency can never
/// stack overlapping requests for the same scan.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// One-shot latch gating the results fetch.
///
/// The polling loop may observe COMPLETED any number of times (and the
/// surrounding reactive scope may re-run on every status change), but
/// the structured findings are fetched exactly once per scan id's
/// transition into COMPLETED. FAILED and STOPPED carry no results
/// payload and never arm the latch.
#[derive(Debug, Default)]
pub struct ResultsGate {
    fetched_for: Option<String>,
}

impl ResultsGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once per scan id, on the first COMPLETED
    /// observation.
    pub fn should_fetch(&mut self, id: &str, state: ScanState) -> bool {
        if state != ScanState::Completed {
            return false;
        }
        if self.fetched_for.as_deref() == Some(id) {
            return false;
        }
        self.fetched_for = Some(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_fires_once_on_completed_transition() {
        let mut gate = ResultsGate::new();
        assert!(!gate.should_fetch("scan-1", ScanState::Running));
        assert!(!gate.should_fetch("scan-1", ScanState::Running));
        assert!(gate.should_fetch("scan-1", ScanState::Completed));
        assert!(!gate.should_fetch("scan-1", ScanState::Completed));
    }

    #[test]
    fn test_gate_ignores_failed_and_stopped() {
        let mut gate = ResultsGate::new();
        assert!(!gate.should_fetch("scan-1", ScanState::Failed));
        assert!(!gate.should_fetch("scan-2", ScanState::Stopped));
        assert!(!gate.should_fetch("scan-3", ScanState::Pending));
    }

    #[test]
    fn test_gate_rearms_for_new_scan_id() {
        let mut gate = ResultsGate::new();
        assert!(gate.should_fetch("scan-1", ScanState::Completed));
        assert!(gate.should_fetch("scan-2", ScanState::Completed));
        assert!(!gate.should_fetch("scan-2", ScanState::Completed));
    }

    #[test]
    fn test_polling_stops_on_every_terminal_state() {
        for state in [ScanState::Completed, ScanState::Failed, ScanState::Stopped] {
            assert!(state.is_terminal());
        }
        for state in [ScanState::Pending, ScanState::Running] {
            assert!(!state.is_terminal());
        }
    }
}
