//! Scan status polling bound to the view lifecycle
//!
//! One polling loop per viewed scan. The loop issues an immediate
//! status fetch, then re-arms a delay after each fetch settles, so
//! in-flight latency never stacks overlapping requests for the same
//! id. It exits on the first terminal state or when the owning view
//! cancels it; after cancellation no signal write occurs.

use std::cell::Cell;
use std::rc::Rc;

use dast_core::{ResultsGate, ResultsPayload, ScanRecord, POLL_INTERVAL};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::api;

/// Signals the poll loop feeds as it observes the scan.
pub struct PollSinks {
    pub status: WriteSignal<Option<ScanRecord>>,
    pub results: WriteSignal<Option<ResultsPayload>>,
    pub results_unavailable: WriteSignal<bool>,
    pub loading: WriteSignal<bool>,
}

/// Starts polling `id`. Cancellation is registered with the current
/// reactive scope, so leaving the view (or switching to another scan
/// id) tears the loop down on every exit path.
pub fn start(id: String, sinks: PollSinks) {
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });
    spawn_local(poll_loop(id, alive, sinks));
}

async fn poll_loop(id: String, alive: Rc<Cell<bool>>, sinks: PollSinks) {
    let mut gate = ResultsGate::new();
    loop {
        match api::scan_status(&id).await {
            Ok(record) => {
                if !alive.get() {
                    return;
                }
                let state = record.state;
                sinks.status.set(Some(record));
                sinks.loading.set(false);
                if gate.should_fetch(&id, state) {
                    fetch_results(&id, &alive, &sinks).await;
                }
                if state.is_terminal() {
                    return;
                }
            }
            Err(err) => {
                // Transient by contract: keep the last good snapshot
                // and retry on the next tick.
                tracing::warn!("status fetch for {} failed: {}", id, err);
                if !alive.get() {
                    return;
                }
                sinks.loading.set(false);
            }
        }
        TimeoutFuture::new(POLL_INTERVAL.as_millis() as u32).await;
        if !alive.get() {
            return;
        }
    }
}

async fn fetch_results(id: &str, alive: &Rc<Cell<bool>>, sinks: &PollSinks) {
    match api::scan_results(id).await {
        Ok(payload) => {
            if alive.get() {
                sinks.results.set(Some(payload));
            }
        }
        Err(err) => {
            // The COMPLETED status stays rendered; only the findings
            // section reports unavailability.
            tracing::error!("results fetch for {} failed: {}", id, err);
            if alive.get() {
                sinks.results_unavailable.set(true);
            }
        }
    }
}
