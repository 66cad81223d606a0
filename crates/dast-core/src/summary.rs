//! Pure aggregation of scan data into display-ready breakdowns

use crate::model::{Finding, ResultsPayload, Risk, ScanRecord, ScanState};
use indexmap::IndexMap;

/// How many entries the type ranking keeps.
pub const TOP_TYPES: usize = 5;

/// Severity breakdown for a completed scan, most severe first. Levels
/// with a zero count are suppressed entirely rather than rendered as
/// empty. Falls back to counting the findings list when the service
/// did not pre-aggregate severities.
pub fn severity_breakdown(payload: &ResultsPayload) -> Vec<(Risk, u64)> {
    let mut counts: IndexMap<Risk, u64> = IndexMap::new();
    if payload.summary.severity_counts.is_empty() {
        for finding in &payload.vulnerabilities {
            *counts.entry(finding.risk).or_insert(0) += 1;
        }
    } else {
        for (risk, count) in &payload.summary.severity_counts {
            *counts.entry(Risk::parse(risk)).or_insert(0) += count;
        }
    }
    let mut breakdown: Vec<(Risk, u64)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    breakdown.sort_by_key(|(risk, _)| risk.rank());
    breakdown
}

/// Top vulnerability types by count, descending. Ties keep the order
/// in which the service first listed the type: the sort is stable and
/// never falls back to alphabetical ordering.
pub fn top_vulnerability_types(payload: &ResultsPayload) -> Vec<(String, u64)> {
    let counts = if payload.summary.type_counts.is_empty() {
        type_counts_from(&payload.vulnerabilities)
    } else {
        payload.summary.type_counts.clone()
    };
    let mut ranking: Vec<(String, u64)> = counts.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1));
    ranking.truncate(TOP_TYPES);
    ranking
}

fn type_counts_from(findings: &[Finding]) -> IndexMap<String, u64> {
    let mut counts = IndexMap::new();
    for finding in findings {
        *counts.entry(finding.alert.clone()).or_insert(0) += 1;
    }
    counts
}

/// Headline numbers for the dashboard metric cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub failed: usize,
}

impl DashboardMetrics {
    pub fn from_scans(scans: &[ScanRecord]) -> Self {
        let count = |state: ScanState| scans.iter().filter(|s| s.state == state).count();
        Self {
            total: scans.len(),
            active: count(ScanState::Running),
            completed: count(ScanState::Completed),
            failed: count(ScanState::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResultsSummary;

    fn payload_with_types(entries: &[(&str, u64)]) -> ResultsPayload {
        let mut summary = ResultsSummary::default();
        for (name, count) in entries {
            summary.type_counts.insert((*name).to_string(), *count);
        }
        ResultsPayload {
            summary,
            ..Default::default()
        }
    }

    fn finding(alert: &str, risk: &str) -> Finding {
        Finding {
            alert: alert.to_string(),
            risk: Risk::parse(risk),
            url: "https://target/a".to_string(),
            description: String::new(),
            solution: String::new(),
            confidence: None,
            cweid: None,
            wascid: None,
        }
    }

    #[test]
    fn test_type_ranking_insertion_order_tie_break() {
        let payload = payload_with_types(&[("SQLi", 3), ("XSS", 5), ("CSRF", 5)]);
        let ranking = top_vulnerability_types(&payload);
        assert_eq!(
            ranking,
            vec![
                ("XSS".to_string(), 5),
                ("CSRF".to_string(), 5),
                ("SQLi".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_type_ranking_truncates_to_top_five() {
        let payload = payload_with_types(&[
            ("A", 9),
            ("B", 8),
            ("C", 7),
            ("D", 6),
            ("E", 5),
            ("F", 4),
        ]);
        let ranking = top_vulnerability_types(&payload);
        assert_eq!(ranking.len(), 5);
        assert_eq!(ranking[4].0, "E");
    }

    #[test]
    fn test_type_ranking_is_deterministic() {
        let payload = payload_with_types(&[("XSS", 2), ("SQLi", 2), ("CSRF", 1)]);
        let first = top_vulnerability_types(&payload);
        let second = top_vulnerability_types(&payload);
        assert_eq!(first, second);
    }

    #[test]
    fn test_severity_breakdown_suppresses_zero_counts() {
        let mut summary = ResultsSummary::default();
        summary.severity_counts.insert("High".to_string(), 2);
        summary.severity_counts.insert("Medium".to_string(), 0);
        summary.severity_counts.insert("low".to_string(), 1);
        let payload = ResultsPayload {
            summary,
            ..Default::default()
        };
        let breakdown = severity_breakdown(&payload);
        assert_eq!(breakdown, vec![(Risk::High, 2), (Risk::Low, 1)]);
    }

    #[test]
    fn test_severity_breakdown_orders_most_severe_first() {
        let mut summary = ResultsSummary::default();
        summary.severity_counts.insert("informational".to_string(), 4);
        summary.severity_counts.insert("High".to_string(), 1);
        let payload = ResultsPayload {
            summary,
            ..Default::default()
        };
        let breakdown = severity_breakdown(&payload);
        assert_eq!(breakdown, vec![(Risk::High, 1), (Risk::Informational, 4)]);
    }

    #[test]
    fn test_breakdowns_derived_from_findings_when_summary_absent() {
        let payload = ResultsPayload {
            vulnerabilities: vec![
                finding("XSS", "High"),
                finding("SQLi", "high"),
                finding("XSS", "Medium"),
            ],
            ..Default::default()
        };
        let breakdown = severity_breakdown(&payload);
        assert_eq!(breakdown, vec![(Risk::High, 2), (Risk::Medium, 1)]);
        let ranking = top_vulnerability_types(&payload);
        assert_eq!(
            ranking,
            vec![("XSS".to_string(), 2), ("SQLi".to_string(), 1)]
        );
    }

    #[test]
    fn test_dashboard_metrics() {
        let record = |id: &str, state: ScanState| ScanRecord {
            id: id.to_string(),
            target_url: "https://t".to_string(),
            scan_type: Default::default(),
            report_format: Default::default(),
            state,
            progress: 0,
            created_at: String::new(),
        };
        let scans = vec![
            record("a", ScanState::Running),
            record("b", ScanState::Completed),
            record("c", ScanState::Completed),
            record("d", ScanState::Failed),
            record("e", ScanState::Pending),
        ];
        let metrics = DashboardMetrics::from_scans(&scans);
        assert_eq!(metrics.total, 5);
        assert_eq!(metrics.active, 1);
        assert_eq!(metrics.completed, 2);
        assert_eq!(metrics.failed, 1);
    }
}
