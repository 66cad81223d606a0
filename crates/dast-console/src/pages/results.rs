//! Scan results view: live status, findings, and report export

use dast_core::{
    report_filename, severity_breakdown, top_vulnerability_types, Finding, ReportFormat,
    ResultsPayload, Risk, ScanRecord, ScanState,
};
use leptos::*;
use leptos_router::use_params_map;

use crate::poller::{self, PollSinks};
use crate::{api, browser};

fn risk_class(risk: Risk) -> &'static str {
    match risk {
        Risk::High => "text-rose-600 bg-rose-50 border-rose-200",
        Risk::Medium => "text-orange-600 bg-orange-50 border-orange-200",
        Risk::Low => "text-yellow-600 bg-yellow-50 border-yellow-200",
        Risk::Informational => "text-blue-600 bg-blue-50 border-blue-200",
        Risk::Unknown => "text-slate-600 bg-slate-50 border-slate-200",
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let (status, set_status) = create_signal(None::<ScanRecord>);
    let (results, set_results) = create_signal(None::<ResultsPayload>);
    let (results_unavailable, set_results_unavailable) = create_signal(false);
    let (loading, set_loading) = create_signal(true);
    let (export_open, set_export_open) = create_signal(false);

    // One polling lifecycle per scan id. Switching ids re-runs this
    // effect, and the cleanup registered by the poller cancels the
    // previous loop before the new one starts.
    create_effect(move |_| {
        let scan_id = id.get();
        if scan_id.is_empty() {
            return;
        }
        set_status.set(None);
        set_results.set(None);
        set_results_unavailable.set(false);
        set_loading.set(true);
        set_export_open.set(false);
        poller::start(
            scan_id,
            PollSinks {
                status: set_status,
                results: set_results,
                results_unavailable: set_results_unavailable,
                loading: set_loading,
            },
        );
    });

    let state = move || status.get().map(|s| s.state);
    let is_failed = move || state() == Some(ScanState::Failed);
    let preferred_format = move || {
        status
            .get()
            .map(|s| s.report_format)
            .filter(|f| *f != ReportFormat::Json)
    };

    let export = move |format: ReportFormat| {
        let scan_id = id.get_untracked();
        spawn_local(async move {
            match api::export_report(&scan_id, format).await {
                Ok(bytes) => {
                    let filename = report_filename(&scan_id, format);
                    if let Err(err) = browser::save_file(&filename, &bytes) {
                        tracing::error!("report download failed: {:?}", err);
                        browser::alert("Export failed");
                    }
                }
                Err(err) => {
                    tracing::error!("export of {} failed: {}", scan_id, err);
                    browser::alert("Export failed");
                }
            }
            let _ = set_export_open.try_set(false);
        });
    };

    let stop = move |_| {
        if !browser::confirm("Are you sure you want to stop this scan?") {
            return;
        }
        let scan_id = id.get_untracked();
        spawn_local(async move {
            match api::stop_scan(&scan_id).await {
                Ok(()) => {
                    browser::alert("Stop signal sent");
                    // Reflect the terminal state without waiting for
                    // the next poll tick.
                    match api::scan_status(&scan_id).await {
                        Ok(record) => {
                            let _ = set_status.try_set(Some(record));
                        }
                        Err(err) => tracing::warn!("status refresh failed: {}", err),
                    }
                }
                Err(err) => {
                    tracing::error!("failed to stop scan {}: {}", scan_id, err);
                    browser::alert("Failed to stop scan");
                }
            }
        });
    };

    view! {
        <Show when=move || !is_failed() fallback=|| view! { <FailedView/> }>
            <div class="space-y-6">
                <div class="flex items-center justify-between border-b border-slate-200 pb-6">
                    <div>
                        <div class="flex items-center gap-2 mb-1">
                            <a href="/" class="text-slate-400 hover:text-slate-600">"Dashboard"</a>
                            <span class="text-slate-300">"/"</span>
                            <span class="font-mono text-sm text-slate-500">{move || id.get()}</span>
                        </div>
                        <h1 class="text-xl font-bold text-slate-900">"Scan Results"</h1>
                    </div>
                    <div class="flex gap-2 relative">
                        <Show when=move || state() == Some(ScanState::Running)>
                            <button
                                on:click=stop
                                class="bg-white border border-rose-300 text-rose-700 px-4 py-2 rounded text-sm font-medium hover:bg-rose-50 shadow-sm"
                            >
                                "Stop Scan"
                            </button>
                        </Show>
                        <Show when=move || state() == Some(ScanState::Completed)>
                            <div class="flex gap-2">
                                <Show when=move || preferred_format().is_some()>
                                    <button
                                        on:click=move |_| {
                                            if let Some(format) = preferred_format() {
                                                export(format);
                                            }
                                        }
                                        class="bg-indigo-600 text-white px-4 py-2 rounded text-sm font-medium hover:bg-indigo-700 shadow-sm"
                                    >
                                        {move || {
                                            let name = preferred_format().map(|f| f.as_str()).unwrap_or("");
                                            format!("Download {}", name)
                                        }}
                                    </button>
                                </Show>
                                <div class="relative">
                                    <button
                                        on:click=move |_| set_export_open.update(|open| *open = !*open)
                                        class="bg-white border border-slate-300 text-slate-700 px-4 py-2 rounded text-sm font-medium hover:bg-slate-50 shadow-sm"
                                    >
                                        {move || if preferred_format().is_some() { "Other Formats" } else { "Export Report" }}
                                    </button>
                                    <Show when=move || export_open.get()>
                                        <div class="absolute right-0 mt-2 w-48 bg-white rounded-md shadow-lg border border-slate-100 z-10 py-1">
                                            <button
                                                on:click=move |_| export(ReportFormat::Json)
                                                class="block w-full text-left px-4 py-2 text-sm text-slate-700 hover:bg-slate-50"
                                            >
                                                "JSON (Raw)"
                                            </button>
                                            <button
                                                on:click=move |_| export(ReportFormat::Sarif)
                                                class="block w-full text-left px-4 py-2 text-sm text-slate-700 hover:bg-slate-50"
                                            >
                                                "SARIF (GitHub)"
                                            </button>
                                            <button
                                                on:click=move |_| export(ReportFormat::Ocsf)
                                                class="block w-full text-left px-4 py-2 text-sm text-slate-700 hover:bg-slate-50"
                                            >
                                                "OCSF (Schema)"
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            </div>
                        </Show>
                    </div>
                </div>

                <Show when=move || loading.get() && status.get().is_none()>
                    <div class="p-10 text-center text-slate-500">"Loading..."</div>
                </Show>

                <Show when=move || status.get().map(|s| s.state != ScanState::Completed).unwrap_or(false)>
                    {move || match state() {
                        Some(ScanState::Stopped) => view! {
                            <div class="bg-white border border-slate-200 rounded p-6 text-center">
                                <div class="text-rose-600 font-bold">"Scan Terminated by User"</div>
                            </div>
                        }
                        .into_view(),
                        _ => view! {
                            <div class="bg-white border border-slate-200 rounded p-6 text-center">
                                <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-slate-900 mb-4"></div>
                                <h3 class="text-lg font-medium">
                                    {move || format!(
                                        "Scan in Progress: {}%",
                                        status.get().map(|s| s.progress).unwrap_or(0)
                                    )}
                                </h3>
                                <p class="text-slate-500 text-sm mt-1">
                                    {move || state().map(|s| s.to_string()).unwrap_or_default()}
                                    " - Orchestrating scan engine..."
                                </p>
                            </div>
                        }
                        .into_view(),
                    }}
                </Show>

                <Show when=move || results_unavailable.get()>
                    <div class="bg-amber-50 border border-amber-200 text-amber-800 rounded p-4 text-sm">
                        "Results unavailable. The scan finished but its findings could not be retrieved."
                    </div>
                </Show>

                {move || results.get().map(|payload| view! { <ResultsBody payload=payload/> })}
            </div>
        </Show>
    }
}

#[component]
fn ResultsBody(payload: ResultsPayload) -> impl IntoView {
    let severities = severity_breakdown(&payload);
    let types = top_vulnerability_types(&payload);
    let findings = payload.vulnerabilities;
    let total = findings.len();

    view! {
        <Show when=move || { total > 0 }>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-white border border-slate-200 rounded p-6">
                    <h3 class="text-sm font-bold text-slate-800 uppercase tracking-wide mb-4">"Severity Breakdown"</h3>
                    <div class="grid grid-cols-2 gap-4">
                        {severities
                            .iter()
                            .map(|(risk, count)| view! {
                                <div class=format!("p-4 rounded border text-center {}", risk_class(*risk))>
                                    <div class="text-2xl font-bold">{*count}</div>
                                    <div class="text-xs uppercase font-medium opacity-75">{risk.to_string()}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="bg-white border border-slate-200 rounded p-6">
                    <h3 class="text-sm font-bold text-slate-800 uppercase tracking-wide mb-4">"Top Vulnerability Types"</h3>
                    <div class="space-y-3">
                        {types
                            .iter()
                            .map(|(name, count)| view! {
                                <div class="flex justify-between items-center text-sm border-b border-slate-100 last:border-0 pb-2">
                                    <span class="text-slate-700 font-medium truncate pr-4">{name.clone()}</span>
                                    <span class="bg-slate-100 text-slate-600 px-2 py-0.5 rounded text-xs font-bold">{*count}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>

        <div class="bg-white border border-slate-200 rounded shadow-sm overflow-hidden">
            <div class="px-6 py-4 border-b border-slate-100 bg-slate-50/50 flex justify-between items-center">
                <h3 class="font-bold text-slate-800 text-sm uppercase tracking-wide">"Vulnerability Index"</h3>
                <span class="text-xs text-slate-500">{total}" findings"</span>
            </div>
            <div class="divide-y divide-slate-100">
                <Show when=move || total == 0>
                    <div class="p-8 text-center text-slate-500">"No vulnerabilities found. System secure."</div>
                </Show>
                {findings
                    .into_iter()
                    .map(|finding| view! { <FindingRow finding=finding/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FindingRow(finding: Finding) -> impl IntoView {
    let badge = risk_class(finding.risk);

    view! {
        <details class="group open:bg-slate-50/50">
            <summary class="flex items-center p-4 cursor-pointer list-none hover:bg-slate-50">
                <div class=format!("w-24 text-xs font-bold uppercase text-center py-1 rounded border mr-4 {}", badge)>
                    {finding.risk.to_string()}
                </div>
                <div class="flex-1 font-medium text-slate-800 text-sm">{finding.alert.clone()}</div>
                <div class="hidden md:block text-xs font-mono text-slate-400 truncate w-64 text-right">
                    {finding.url.clone()}
                </div>
            </summary>
            <div class="px-10 pb-6 pt-2 text-sm text-slate-600 space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <h4 class="font-bold text-slate-900 text-xs uppercase mb-2">"Description"</h4>
                        <p class="leading-relaxed bg-white p-3 rounded border border-slate-200">{finding.description.clone()}</p>
                    </div>
                    <div>
                        <h4 class="font-bold text-slate-900 text-xs uppercase mb-2">"Remediation"</h4>
                        <p class="leading-relaxed bg-white p-3 rounded border border-slate-200">{finding.solution.clone()}</p>
                    </div>
                </div>
                <div>
                    <h4 class="font-bold text-slate-900 text-xs uppercase mb-1">"Affected Resource"</h4>
                    <code class="bg-slate-800 text-slate-100 px-2 py-1 rounded text-xs font-mono break-all block w-full">
                        {finding.url.clone()}
                    </code>
                </div>
                {finding.confidence.clone().map(|confidence| view! {
                    <div class="text-xs text-slate-400">
                        "Confidence: "{confidence}
                        {finding.cweid.clone().map(|cwe| format!(" (CWE-{})", cwe))}
                    </div>
                })}
            </div>
        </details>
    }
}

#[component]
fn FailedView() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto mt-12 mb-12 text-center">
            <div class="bg-red-50 text-red-700 p-8 rounded-xl border border-red-200">
                <h2 class="text-2xl font-bold mb-2">"Scan Failed"</h2>
                <p class="mb-6">"The security analysis encountered an unexpected error and could not complete."</p>
                <a
                    href="/"
                    class="inline-block bg-red-600 hover:bg-red-700 text-white px-6 py-3 rounded-lg font-medium"
                >
                    "Return to Dashboard"
                </a>
            </div>
        </div>
    }
}
