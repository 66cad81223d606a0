//! HTTP client for the Scan Orchestration Service
//!
//! Thin typed wrappers over the five operations the service exposes.
//! Callers decide how a failure is surfaced: user-initiated actions
//! alert, the background poll logs and retries.

use dast_core::{ReportFormat, ResultsPayload, ScanRecord, StartScanRequest, StartedScan};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("scan service returned HTTP {0}")]
    Status(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Base URL of the orchestration service. Empty means same origin.
fn api_base() -> &'static str {
    option_env!("DAST_API_URL").unwrap_or("")
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

pub async fn list_scans() -> ApiResult<Vec<ScanRecord>> {
    let response = reqwest::Client::new()
        .get(endpoint("/api/scans"))
        .send()
        .await?;
    Ok(check(response)?.json().await?)
}

pub async fn start_scan(request: &StartScanRequest) -> ApiResult<StartedScan> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/scan"))
        .json(request)
        .send()
        .await?;
    Ok(check(response)?.json().await?)
}

pub async fn scan_status(id: &str) -> ApiResult<ScanRecord> {
    let response = reqwest::Client::new()
        .get(endpoint(&format!("/api/scan/{}", id)))
        .send()
        .await?;
    Ok(check(response)?.json().await?)
}

pub async fn scan_results(id: &str) -> ApiResult<ResultsPayload> {
    let response = reqwest::Client::new()
        .get(endpoint(&format!("/api/scan/{}/results", id)))
        .query(&[("format", ReportFormat::Json.as_str())])
        .send()
        .await?;
    Ok(check(response)?.json().await?)
}

/// Fetches the server-rendered report as raw bytes for download.
pub async fn export_report(id: &str, format: ReportFormat) -> ApiResult<Vec<u8>> {
    let response = reqwest::Client::new()
        .get(endpoint(&format!("/api/scan/{}/results", id)))
        .query(&[("format", format.as_str())])
        .send()
        .await?;
    Ok(check(response)?.bytes().await?.to_vec())
}

pub async fn stop_scan(id: &str) -> ApiResult<()> {
    let response = reqwest::Client::new()
        .post(endpoint(&format!("/api/scan/{}/stop", id)))
        .send()
        .await?;
    check(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert!(endpoint("/api/scans").ends_with("/api/scans"));
        assert!(endpoint("/api/scan/abcd/stop").ends_with("/api/scan/abcd/stop"));
    }
}
