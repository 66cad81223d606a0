//! Scan state badge

use dast_core::ScanState;
use leptos::*;

#[component]
pub fn StatusBadge(state: ScanState) -> impl IntoView {
    let style = match state {
        ScanState::Completed => "bg-emerald-50 text-emerald-700 border-emerald-200",
        ScanState::Running => "bg-blue-50 text-blue-700 border-blue-200",
        ScanState::Failed | ScanState::Stopped => "bg-rose-50 text-rose-700 border-rose-200",
        ScanState::Pending => "bg-slate-50 text-slate-600 border-slate-200",
    };

    view! {
        <span class=format!("px-2 py-0.5 text-[11px] font-bold uppercase tracking-wide rounded border {}", style)>
            {state.to_string()}
        </span>
    }
}
