//! Navigation component

use leptos::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-slate-900 border-b border-slate-800 sticky top-0 z-50">
            <div class="max-w-screen-2xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex h-14 items-center justify-between">
                    <div class="flex items-center gap-8">
                        <a href="/" class="flex items-center gap-2">
                            <div class="flex h-7 w-7 items-center justify-center rounded bg-indigo-500 text-white font-bold text-lg">"D"</div>
                            <span class="font-semibold text-lg text-white tracking-tight">"DAST Console"</span>
                        </a>
                        <div class="hidden sm:flex sm:space-x-1">
                            <a href="/" class="px-3 py-2 text-sm font-medium rounded-md text-slate-300 hover:bg-slate-800 hover:text-white">"Dashboard"</a>
                            <a href="/new" class="px-3 py-2 text-sm font-medium rounded-md text-slate-300 hover:bg-slate-800 hover:text-white">"New Scan"</a>
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
