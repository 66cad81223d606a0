//! Report export naming

use crate::model::ReportFormat;

/// Filename for a downloaded report. Deterministic in `(id, format)`.
pub fn report_filename(id: &str, format: ReportFormat) -> String {
    format!("scan-report-{}.{}", id, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sarif_extension() {
        assert_eq!(
            report_filename("abcd1234-xxxx", ReportFormat::Sarif),
            "scan-report-abcd1234-xxxx.sarif"
        );
    }

    #[test]
    fn test_json_encoded_formats_share_extension() {
        assert_eq!(
            report_filename("abcd1234-xxxx", ReportFormat::Ocsf),
            "scan-report-abcd1234-xxxx.json"
        );
        assert_eq!(
            report_filename("abcd1234-xxxx", ReportFormat::Json),
            "scan-report-abcd1234-xxxx.json"
        );
    }
}
