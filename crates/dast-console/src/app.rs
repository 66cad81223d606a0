//! Main application component

use crate::components::Nav;
use crate::pages::{DashboardPage, NewScanPage, ResultsPage};
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-slate-100 font-sans text-slate-900">
                <Nav/>
                <main class="max-w-screen-2xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                    <Routes>
                        <Route path="/" view=DashboardPage/>
                        <Route path="/new" view=NewScanPage/>
                        <Route path="/scan/:id" view=ResultsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
