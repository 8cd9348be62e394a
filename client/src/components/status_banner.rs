//! Transient status banner with timed auto-dismissal.

use leptos::prelude::*;

use crate::state::ui::{StatusKind, UiState};

/// Show a status and schedule its auto-dismissal. A newer banner bumps the
/// generation, so an older timer firing late clears nothing.
pub fn show_transient_status(ui: RwSignal<UiState>, text: impl Into<String>, kind: StatusKind) {
    let seq = ui.try_update(|u| u.show_status(text, kind)).unwrap_or_default();
    schedule_dismiss(ui, seq);
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(ui: RwSignal<UiState>, seq: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(
            crate::state::ui::STATUS_DISMISS_SECS,
        ))
        .await;
        ui.update(|u| u.dismiss_status(seq));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(_ui: RwSignal<UiState>, _seq: u64) {}

/// Banner rendering the current transient status, if any.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let class = move || {
        let flavor = match ui.get().status.map(|s| s.kind) {
            Some(StatusKind::Success) => "success",
            Some(StatusKind::Error) => "error",
            Some(StatusKind::Info) | None => "info",
        };
        format!("status-banner status-banner--{flavor}")
    };

    view! {
        <Show when=move || ui.get().status.is_some()>
            <div class=class.clone()>
                {move || ui.get().status.map(|s| s.text).unwrap_or_default()}
            </div>
        </Show>
    }
}
