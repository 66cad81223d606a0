//! Dashboard: scan list and headline metrics

use std::cell::Cell;
use std::rc::Rc;

use dast_core::{format_timestamp, DashboardMetrics, ScanRecord, POLL_INTERVAL};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::api;
use crate::components::{MetricCard, StatusBadge};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (scans, set_scans) = create_signal(Vec::<ScanRecord>::new());

    // The list refreshes on the same cadence as the status poll and
    // stops when the page is left.
    create_effect(move |_| {
        let alive = Rc::new(Cell::new(true));
        on_cleanup({
            let alive = alive.clone();
            move || alive.set(false)
        });
        spawn_local(async move {
            loop {
                match api::list_scans().await {
                    Ok(list) => {
                        if !alive.get() {
                            return;
                        }
                        set_scans.set(list);
                    }
                    Err(err) => {
                        tracing::warn!("scan list fetch failed: {}", err);
                    }
                }
                TimeoutFuture::new(POLL_INTERVAL.as_millis() as u32).await;
                if !alive.get() {
                    return;
                }
            }
        });
    });

    let metrics = create_memo(move |_| scans.with(|list| DashboardMetrics::from_scans(list)));

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <MetricCard
                    title="Total Scans"
                    value=Signal::derive(move || metrics.get().total.to_string())
                    subtext="All time"
                />
                <MetricCard
                    title="Active Scans"
                    value=Signal::derive(move || metrics.get().active.to_string())
                    subtext="Currently running"
                />
                <MetricCard
                    title="Completed"
                    value=Signal::derive(move || metrics.get().completed.to_string())
                    subtext="Results available"
                />
                <MetricCard
                    title="Failed"
                    value=Signal::derive(move || metrics.get().failed.to_string())
                    subtext="Did not finish"
                />
            </div>

            <div class="flex justify-between items-end">
                <h2 class="text-lg font-bold text-slate-800">"Recent Activity"</h2>
                <a href="/new" class="bg-indigo-600 text-white text-xs font-bold uppercase px-4 py-2 rounded hover:bg-indigo-700">
                    "New Scan"
                </a>
            </div>

            <div class="bg-white border border-slate-200 rounded shadow-sm overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-slate-200">
                        <thead class="bg-slate-50">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-bold text-slate-500 uppercase tracking-wider w-24">"ID"</th>
                                <th class="px-4 py-3 text-left text-xs font-bold text-slate-500 uppercase tracking-wider">"Target"</th>
                                <th class="px-4 py-3 text-left text-xs font-bold text-slate-500 uppercase tracking-wider w-32">"Status"</th>
                                <th class="px-4 py-3 text-left text-xs font-bold text-slate-500 uppercase tracking-wider w-40">"Progress"</th>
                                <th class="px-4 py-3 text-left text-xs font-bold text-slate-500 uppercase tracking-wider w-48">"Date"</th>
                                <th class="px-4 py-3 w-20"></th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-slate-200">
                            <For
                                each=move || scans.get()
                                key=|scan| (scan.id.clone(), scan.state, scan.progress)
                                children=move |scan| view! { <ScanRow scan=scan/> }
                            />
                        </tbody>
                    </table>
                </div>
                <Show when=move || scans.with(Vec::is_empty)>
                    <div class="px-6 py-8 text-center text-sm text-slate-500">"No scans found."</div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ScanRow(scan: ScanRecord) -> impl IntoView {
    let short_id: String = scan.id.chars().take(8).collect();
    let bar_color = if scan.state == dast_core::ScanState::Failed {
        "bg-rose-500"
    } else {
        "bg-indigo-600"
    };

    view! {
        <tr class="hover:bg-slate-50">
            <td class="px-4 py-2 whitespace-nowrap text-xs font-mono text-slate-500">{short_id}</td>
            <td class="px-4 py-2 whitespace-nowrap text-sm font-medium text-slate-900">{scan.target_url.clone()}</td>
            <td class="px-4 py-2 whitespace-nowrap">
                <StatusBadge state=scan.state/>
            </td>
            <td class="px-4 py-2 whitespace-nowrap text-xs text-slate-500">
                <div class="flex items-center gap-2">
                    <div class="flex-1 bg-slate-100 rounded-full h-1.5 min-w-[60px]">
                        <div
                            class=format!("h-1.5 rounded-full {}", bar_color)
                            style=format!("width: {}%", scan.progress)
                        ></div>
                    </div>
                    <span class="font-mono w-8 text-right">{scan.progress}"%"</span>
                </div>
            </td>
            <td class="px-4 py-2 whitespace-nowrap text-xs text-slate-500">{format_timestamp(&scan.created_at)}</td>
            <td class="px-4 py-2 whitespace-nowrap text-right text-xs font-medium">
                <a href=format!("/scan/{}", scan.id) class="text-indigo-600 hover:text-indigo-900">
                    "Details →"
                </a>
            </td>
        </tr>
    }
}
