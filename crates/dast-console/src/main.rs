//! DAST Console
//!
//! Client-side rendered console for the Scan Orchestration Service:
//! tracks scan lifecycles by polling, renders findings, and exports
//! reports in JSON, SARIF, or OCSF.

mod api;
mod app;
mod browser;
mod components;
mod pages;
mod poller;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    mount_to_body(|| {
        view! {
            <app::App/>
        }
    });
}
