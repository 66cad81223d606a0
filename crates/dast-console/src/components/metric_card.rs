//! Dashboard metric card

use leptos::*;

#[component]
pub fn MetricCard(
    title: &'static str,
    value: Signal<String>,
    subtext: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded border border-slate-200 shadow-sm">
            <h3 class="text-xs font-semibold text-slate-500 uppercase tracking-wider mb-2">{title}</h3>
            <div class="text-2xl font-bold text-slate-900">{value}</div>
            <div class="text-xs text-slate-400 mt-1">{subtext}</div>
        </div>
    }
}
