//! Host page composing the configuration form, log table, and embed panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route. It runs the silent automatic project
//! resolution, re-fetches whenever the fetch parameters change, validates
//! the explicit fetch action, and derives the embed target from the
//! current selection.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use embed::TraceTarget;
use records::LogRecord;

use crate::components::config_form::ConfigForm;
use crate::components::logs_table::LogsTable;
use crate::components::status_banner::{StatusBanner, show_transient_status};
use crate::components::trace_panel::TracePanel;
use crate::state::config::{ConfigState, FetchParams};
use crate::state::logs::LogsState;
use crate::state::ui::{StatusKind, UiState};

/// Embed target for the current selection. Requires both a resolved
/// project id and a selected record; either missing tears the embed down.
fn trace_target_for(config: &ConfigState, selected: Option<&LogRecord>) -> Option<TraceTarget> {
    let record = selected?;
    if config.project_id.is_empty() {
        return None;
    }
    Some(TraceTarget::new(
        config.instance_url.clone(),
        config.org_name.clone(),
        config.project_slug(),
        config.api_key.clone(),
        config.project_id.clone(),
        record.embed_root_span_id(),
    ))
}

/// The trace viewer demo page.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<RwSignal<ConfigState>>();
    let logs = expect_context::<RwSignal<LogsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let selected = RwSignal::new(None::<LogRecord>);

    // A selection is scoped to the project it was fetched under; drop it
    // whenever the resolved id changes.
    let seen_project_id = RwSignal::new(String::new());
    Effect::new(move || {
        let project_id = config.get().project_id;
        if seen_project_id.get_untracked() != project_id {
            seen_project_id.set(project_id);
            selected.set(None);
        }
    });

    // Silent automatic project resolution from the configured name.
    // Failures stay off-screen; the explicit fetch action surfaces them.
    Effect::new(move || {
        let snapshot = config.get();
        if !snapshot.wants_resolution() {
            return;
        }
        config.update(|c| {
            c.last_resolved_name = c.project_name.clone();
            c.resolving = true;
        });
        resolve_project_silently(config, ui, snapshot);
    });

    // Re-run the fetch whenever its parameters change; absent parameters
    // clear the collection without a network call.
    let seen_params = RwSignal::new(None::<FetchParams>);
    Effect::new(move || {
        let params = config.with(|c| c.fetch_params());
        if seen_params.get_untracked() == params {
            return;
        }
        seen_params.set(params.clone());
        match params {
            None => logs.update(|l| l.clear()),
            Some(params) => {
                let api_key = config.get_untracked().api_key;
                start_fetch(logs, params, api_key);
            }
        }
    });

    let on_fetch = Callback::new(move |()| {
        config.update(|c| c.has_attempted_fetch = true);
        let snapshot = config.get_untracked();
        if let Some(message) = snapshot.validation_message() {
            show_transient_status(ui, message, StatusKind::Error);
            return;
        }
        let Some(params) = snapshot.fetch_params() else {
            return;
        };
        start_fetch(logs, params, snapshot.api_key);
    });

    let on_select = Callback::new(move |record: LogRecord| {
        selected.set(Some(record));
        show_transient_status(ui, "Trace loaded successfully!", StatusKind::Success);
    });

    let on_close = Callback::new(move |()| selected.set(None));

    let target = Memo::new(move |_| {
        let snapshot = config.get();
        selected.with(|sel| trace_target_for(&snapshot, sel.as_ref()))
    });

    let selected_id = Signal::derive(move || selected.get().map(|record| record.id));

    let show_empty_state = move || {
        let state = logs.get();
        target.get().is_none()
            && !state.loading
            && state.records.is_empty()
            && state.error.is_none()
            && !config.get().project_id.is_empty()
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Trace Viewer Embed Demo"</h1>
                <p>"Browse recent logs and click a row to view the trace"</p>
            </header>

            <StatusBanner/>
            <ConfigForm on_fetch=on_fetch/>

            <Show when=move || logs.get().error.is_some()>
                <div class="fetch-error">
                    <strong>"Error: "</strong>
                    {move || logs.get().error.unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || !logs.get().records.is_empty()>
                <section class="logs-section">
                    <div class="logs-section__header">
                        <h2>{move || format!("Recent Logs ({})", logs.get().records.len())}</h2>
                        <p>"Click a log row to view its trace in the panel"</p>
                    </div>
                    <LogsTable selected_id=selected_id on_select=on_select/>
                </section>
            </Show>

            <Show when=show_empty_state>
                <div class="empty-state">
                    <p>"No logs found for this project in the selected window."</p>
                    <p>"Try a different project or check that logs are being recorded."</p>
                </div>
            </Show>

            <Show when=move || target.get().is_some()>
                <TracePanel target=target on_close=on_close/>
            </Show>
        </div>
    }
}

/// Resolve the project id in the background. Results for a name the user
/// has since edited away are discarded; failures are logged, never shown.
#[cfg(feature = "hydrate")]
fn resolve_project_silently(
    config: RwSignal<ConfigState>,
    ui: RwSignal<UiState>,
    snapshot: ConfigState,
) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::resolve_project(
            &snapshot.api_key,
            &snapshot.decoded_org(),
            &snapshot.project_name,
        )
        .await;
        config.update(|c| c.resolving = false);

        match result {
            Ok(Some(project)) => {
                let current = config.get_untracked();
                if current.project_name != snapshot.project_name {
                    return;
                }
                config.update(|c| c.project_id = project.id);
                if current.has_attempted_fetch {
                    show_transient_status(
                        ui,
                        format!(
                            "Auto-detected project ID from name \"{}\"",
                            snapshot.project_name
                        ),
                        StatusKind::Success,
                    );
                }
            }
            Ok(None) => {
                log::warn!(
                    "could not find project \"{}\" in org \"{}\"",
                    snapshot.project_name,
                    snapshot.decoded_org()
                );
            }
            Err(err) => {
                log::warn!("project resolution failed: {err}");
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn resolve_project_silently(
    config: RwSignal<ConfigState>,
    _ui: RwSignal<UiState>,
    _snapshot: ConfigState,
) {
    config.update(|c| c.resolving = false);
}

/// Begin a log fetch; the completion only lands if it is still the newest.
#[cfg(feature = "hydrate")]
fn start_fetch(logs: RwSignal<LogsState>, params: FetchParams, api_key: String) {
    let ticket = logs.try_update(|l| l.start(params.clone())).unwrap_or_default();
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_logs(&api_key, &params).await;
        logs.update(|l| {
            l.finish(ticket, result);
        });
    });
}

#[cfg(not(feature = "hydrate"))]
fn start_fetch(_logs: RwSignal<LogsState>, _params: FetchParams, _api_key: String) {}
