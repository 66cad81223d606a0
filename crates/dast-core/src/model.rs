//! Wire models for the Scan Orchestration Service

use chrono::{DateTime, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a scan as reported by the orchestration service.
///
/// Terminal states never transition again for a given scan id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScanState {
    Pending,
    Running,
    Completed,
    Failed,
    Stopped,
}

impl ScanState {
    /// Whether this state ends the polling loop.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScanState::Completed | ScanState::Failed | ScanState::Stopped
        )
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScanState::Pending => "PENDING",
            ScanState::Running => "RUNNING",
            ScanState::Completed => "COMPLETED",
            ScanState::Failed => "FAILED",
            ScanState::Stopped => "STOPPED",
        };
        write!(f, "{}", s)
    }
}

/// Kind of assessment the engine runs against the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScanType {
    #[default]
    Api,
    Web,
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanType::Api => write!(f, "API"),
            ScanType::Web => write!(f, "WEB"),
        }
    }
}

/// Report serialization rendered by the orchestration service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportFormat {
    #[default]
    Json,
    Sarif,
    Ocsf,
}

impl ReportFormat {
    /// Wire name, also used as the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Json => "JSON",
            ReportFormat::Sarif => "SARIF",
            ReportFormat::Ocsf => "OCSF",
        }
    }

    /// File extension for a downloaded report. OCSF is JSON-encoded
    /// and shares the `json` extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Sarif => "sarif",
            ReportFormat::Json | ReportFormat::Ocsf => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk level of a finding. The service is not strict about casing,
/// so parsing is case-insensitive with a fallback for values outside
/// the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Risk {
    High,
    Medium,
    Low,
    Informational,
    Unknown,
}

impl Risk {
    pub fn parse(s: &str) -> Risk {
        match s.to_ascii_lowercase().as_str() {
            "high" => Risk::High,
            "medium" => Risk::Medium,
            "low" => Risk::Low,
            "informational" => Risk::Informational,
            _ => Risk::Unknown,
        }
    }

    /// Display ordering, most severe first.
    pub fn rank(&self) -> u8 {
        match self {
            Risk::High => 0,
            Risk::Medium => 1,
            Risk::Low => 2,
            Risk::Informational => 3,
            Risk::Unknown => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::High => "High",
            Risk::Medium => "Medium",
            Risk::Low => "Low",
            Risk::Informational => "Informational",
            Risk::Unknown => "Unknown",
        }
    }
}

impl From<String> for Risk {
    fn from(s: String) -> Self {
        Risk::parse(&s)
    }
}

impl From<Risk> for String {
    fn from(r: Risk) -> Self {
        r.as_str().to_string()
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scan as tracked by the orchestration service. Snapshots are
/// immutable; every poll replaces the previous record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: String,
    pub target_url: String,
    #[serde(default)]
    pub scan_type: ScanType,
    #[serde(default)]
    pub report_format: ReportFormat,
    pub state: ScanState,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub created_at: String,
}

/// A single reported vulnerability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub alert: String,
    pub risk: Risk,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub cweid: Option<String>,
    #[serde(default)]
    pub wascid: Option<String>,
}

/// Pre-aggregated counts attached to a results payload. Both maps
/// keep the service's key order, which is the tie-break for the type
/// ranking. Either map may be absent when the service sends only a
/// total count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsSummary {
    #[serde(default)]
    pub severity_counts: IndexMap<String, u64>,
    #[serde(default)]
    pub type_counts: IndexMap<String, u64>,
}

/// Structured findings for a COMPLETED scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsPayload {
    #[serde(default)]
    pub scan_id: String,
    #[serde(default)]
    pub vulnerabilities: Vec<Finding>,
    #[serde(default)]
    pub summary: ResultsSummary,
}

/// Body of the start-scan request.
#[derive(Debug, Clone, Serialize)]
pub struct StartScanRequest {
    pub target_url: String,
    pub scan_type: ScanType,
    pub report_format: ReportFormat,
}

/// Start-scan response. The service echoes the full record; only the
/// minted id is contractual.
#[derive(Debug, Clone, Deserialize)]
pub struct StartedScan {
    pub id: String,
}

/// Strips a leading `http(s)://` for display. The value submitted to
/// the service is always the user-entered string, not this one.
pub fn display_target(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Renders a service timestamp for the scan table. The service does
/// not guarantee an offset on `created_at`, so this tries RFC 3339
/// first, then a bare ISO 8601 local time, and falls back to the raw
/// string.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!ScanState::Pending.is_terminal());
        assert!(!ScanState::Running.is_terminal());
        assert!(ScanState::Completed.is_terminal());
        assert!(ScanState::Failed.is_terminal());
        assert!(ScanState::Stopped.is_terminal());
    }

    #[test]
    fn test_risk_parse_case_insensitive() {
        assert_eq!(Risk::parse("HIGH"), Risk::High);
        assert_eq!(Risk::parse("informational"), Risk::Informational);
        assert_eq!(Risk::parse("Medium"), Risk::Medium);
        assert_eq!(Risk::parse("severe"), Risk::Unknown);
    }

    #[test]
    fn test_scan_record_from_service_json() {
        let json = r#"{
            "id": "abcd1234-xxxx",
            "state": "RUNNING",
            "progress": 40,
            "created_at": "2025-03-01T10:30:00.123456",
            "target_url": "https://api.example.com",
            "spider_id": "7"
        }"#;
        let record: ScanRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "abcd1234-xxxx");
        assert_eq!(record.state, ScanState::Running);
        assert_eq!(record.progress, 40);
        assert_eq!(record.report_format, ReportFormat::Json);
    }

    #[test]
    fn test_results_payload_without_summary_maps() {
        let json = r#"{
            "scan_id": "abcd",
            "vulnerabilities": [
                {"alert": "XSS", "risk": "high", "url": "https://t/a"}
            ],
            "summary": {"count": 1}
        }"#;
        let payload: ResultsPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.vulnerabilities.len(), 1);
        assert!(payload.summary.severity_counts.is_empty());
        assert_eq!(payload.vulnerabilities[0].risk, Risk::High);
    }

    #[test]
    fn test_display_target_strips_scheme() {
        assert_eq!(display_target("https://api.example.com"), "api.example.com");
        assert_eq!(display_target("http://api.example.com"), "api.example.com");
        assert_eq!(display_target("api.example.com"), "api.example.com");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2025-03-01T10:30:00.123456"),
            "2025-03-01 10:30"
        );
        assert_eq!(
            format_timestamp("2025-03-01T10:30:00+00:00"),
            "2025-03-01 10:30"
        );
        assert_eq!(format_timestamp("not a date"), "not a date");
    }
}
