//! New scan form

use dast_core::{display_target, ReportFormat, ScanType, StartScanRequest};
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;

use crate::{api, browser};

#[component]
pub fn NewScanPage() -> impl IntoView {
    let (target, set_target) = create_signal(String::new());
    let (scan_type, set_scan_type) = create_signal(ScanType::Api);
    let (report_format, set_report_format) = create_signal(ReportFormat::Json);
    let (submitting, set_submitting) = create_signal(false);
    let navigate = use_navigate();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        // The service receives the URL exactly as entered; only the
        // form display strips the scheme.
        let request = StartScanRequest {
            target_url: target.get_untracked(),
            scan_type: scan_type.get_untracked(),
            report_format: report_format.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::start_scan(&request).await {
                Ok(started) => {
                    navigate(&format!("/scan/{}", started.id), Default::default());
                }
                Err(err) => {
                    // The form keeps its entered state for retry.
                    tracing::error!("scan failed to start: {}", err);
                    browser::alert("Failed to start scan");
                }
            }
            set_submitting.try_set(false);
        });
    };

    let type_button = move |label: &'static str, caption: &'static str, value: ScanType| {
        let selected = move || scan_type.get() == value;
        view! {
            <button
                type="button"
                on:click=move |_| set_scan_type.set(value)
                class=move || format!(
                    "px-4 py-3 rounded-lg border text-sm font-medium text-left {}",
                    if selected() {
                        "border-indigo-600 bg-indigo-50 text-indigo-700 ring-1 ring-indigo-600"
                    } else {
                        "border-slate-200 text-slate-600 hover:border-slate-300 hover:bg-slate-50"
                    }
                )
            >
                <div class="font-bold mb-1">{label}</div>
                <div class="text-xs opacity-80 font-normal">{caption}</div>
            </button>
        }
    };

    view! {
        <div class="max-w-xl mx-auto mt-12 mb-12">
            <div class="text-center mb-8">
                <h2 class="text-3xl font-bold text-slate-900 tracking-tight">"Start New Security Scan"</h2>
                <p class="text-slate-500 mt-2">"Enter the target details below to begin the automated analysis."</p>
            </div>

            <div class="bg-white rounded-xl border border-slate-200 shadow-sm p-6">
                <form on:submit=submit class="space-y-6">
                    <div>
                        <label class="block text-sm font-semibold text-slate-700 mb-2">"Target URL"</label>
                        <div class="relative">
                            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                <span class="text-slate-400 text-sm">"https://"</span>
                            </div>
                            <input
                                type="text"
                                required
                                class="w-full border border-slate-300 rounded-lg py-2 pl-16 pr-3 font-mono text-sm"
                                placeholder="api.example.com"
                                prop:value=move || target.with(|t| display_target(t).to_string())
                                on:input=move |ev| set_target.set(event_target_value(&ev))
                            />
                        </div>
                        <p class="text-xs text-slate-400 mt-1">"Refrain from scanning targets you do not own."</p>
                    </div>

                    <div>
                        <label class="block text-sm font-semibold text-slate-700 mb-2">"Scan Type"</label>
                        <div class="grid grid-cols-2 gap-4">
                            {type_button("API Scan", "For REST/GraphQL endpoints", ScanType::Api)}
                            {type_button("Web App Scan", "For SPAs and Multi-page apps", ScanType::Web)}
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-semibold text-slate-700 mb-2">"Report Format"</label>
                        <select
                            class="w-full border border-slate-300 rounded-lg py-2 px-3 appearance-none bg-slate-50 text-slate-900"
                            on:change=move |ev| {
                                let format = match event_target_value(&ev).as_str() {
                                    "SARIF" => ReportFormat::Sarif,
                                    "OCSF" => ReportFormat::Ocsf,
                                    _ => ReportFormat::Json,
                                };
                                set_report_format.set(format);
                            }
                        >
                            <option value="JSON" selected=move || report_format.get() == ReportFormat::Json>"JSON (Standard)"</option>
                            <option value="SARIF" selected=move || report_format.get() == ReportFormat::Sarif>"SARIF (GitHub Security)"</option>
                            <option value="OCSF" selected=move || report_format.get() == ReportFormat::Ocsf>"OCSF (Open Schema)"</option>
                        </select>
                    </div>

                    <div class="pt-2">
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full py-3 text-base rounded-lg font-medium bg-slate-900 hover:bg-slate-800 text-white disabled:opacity-60"
                        >
                            {move || if submitting.get() { "Initializing Scan..." } else { "Launch Scan" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
