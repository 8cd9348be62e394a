//! Embed panel hosting the provider's trace viewer in an iframe.
//!
//! ARCHITECTURE
//! ============
//! The panel binds an `embed::EmbedController` to the rendered iframe: the
//! first target navigates, a span-only change retargets in place over
//! postMessage, and a base-configuration change reloads. Inbound messages
//! are accepted only from the configured instance origin. The resize handle
//! uses pointer capture so move/up handling stays scoped to the drag.

use leptos::prelude::*;

use embed::TraceTarget;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::components::status_banner::show_transient_status;
use crate::state::config::ConfigState;
use crate::state::ui::{StatusKind, UiState, width_after_pointer_move};

/// Right-hand embed panel: resize handle, fullscreen toggle, close action,
/// and the iframe surface itself.
#[component]
pub fn TracePanel(
    #[prop(into)] target: Signal<Option<TraceTarget>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<RwSignal<ConfigState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let iframe_ref = NodeRef::<leptos::html::Iframe>::new();
    // Target the iframe currently shows; `None` until the first navigation.
    let active = RwSignal::new(None::<TraceTarget>);

    Effect::new(move || {
        let desired = target.get();
        drive_surface(iframe_ref, active, desired);
    });

    install_message_listener(config);

    let panel_style = move || format!("width: {:.1}vw;", ui.get().rendered_width_vw());

    let on_resize_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ui.update(|u| u.resizing = true);
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_resize_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let state = ui.get_untracked();
        let next = width_after_pointer_move(
            state.resizing,
            state.panel_width_vw,
            f64::from(ev.client_x()),
            viewport_width(),
        );
        if (next - state.panel_width_vw).abs() > f64::EPSILON {
            ui.update(|u| u.panel_width_vw = next);
        }
    };

    let on_resize_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        ui.update(|u| u.resizing = false);
    };

    let toggle_fullscreen = move |_| ui.update(|u| u.fullscreen = !u.fullscreen);
    let fullscreen_label = move || {
        if ui.get().fullscreen { "Exit fullscreen" } else { "Fullscreen" }
    };

    let on_embed_load = move |_| embed_loaded();
    let on_embed_error =
        move |_| show_transient_status(ui, "Failed to load trace", StatusKind::Error);

    view! {
        <div
            class="trace-panel"
            class:trace-panel--fullscreen=move || ui.get().fullscreen
            class:trace-panel--resizing=move || ui.get().resizing
            style=panel_style
            on:pointermove=on_resize_pointer_move
            on:pointerup=on_resize_pointer_up
            on:pointercancel=on_resize_pointer_up
        >
            <div
                class="trace-panel__resize-handle"
                title="Drag to resize"
                on:pointerdown=on_resize_pointer_down
            ></div>

            <div class="trace-panel__header">
                <h2>"Trace Viewer"</h2>
                <div class="trace-panel__actions">
                    <button on:click=toggle_fullscreen title=fullscreen_label>
                        {fullscreen_label}
                    </button>
                    <button on:click=move |_| on_close.run(()) title="Close trace viewer">
                        "Close"
                    </button>
                </div>
            </div>

            <div class="trace-panel__body">
                <iframe
                    node_ref=iframe_ref
                    class="trace-panel__frame"
                    title="Trace viewer embed"
                    on:load=on_embed_load
                    on:error=on_embed_error
                ></iframe>
            </div>
        </div>
    }
}

/// Reconcile the iframe with the desired target via the embed controller.
#[cfg(feature = "hydrate")]
fn drive_surface(
    iframe: NodeRef<leptos::html::Iframe>,
    active: RwSignal<Option<TraceTarget>>,
    desired: Option<TraceTarget>,
) {
    use embed::{EmbedController, EmbedUpdate};

    let Some(next) = desired else {
        active.set(None);
        return;
    };
    let surface = IframeSurface { iframe };
    let outcome = match active.get_untracked() {
        None => EmbedController::new(surface, next.clone())
            .open()
            .map(|()| EmbedUpdate::Reloaded),
        Some(current) => {
            let mut controller = EmbedController::new(surface, current);
            controller.apply(next.clone())
        }
    };
    match outcome {
        Ok(_) => active.set(Some(next)),
        Err(err) => log::warn!("embed surface update failed: {err}"),
    }
}

#[cfg(not(feature = "hydrate"))]
fn drive_surface(
    _iframe: NodeRef<leptos::html::Iframe>,
    active: RwSignal<Option<TraceTarget>>,
    desired: Option<TraceTarget>,
) {
    active.set(desired);
}

/// `EmbedSurface` backed by the rendered iframe element.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct IframeSurface {
    iframe: NodeRef<leptos::html::Iframe>,
}

#[cfg(feature = "hydrate")]
impl IframeSurface {
    fn element(&self) -> Result<web_sys::HtmlIFrameElement, embed::EmbedError> {
        self.iframe
            .get_untracked()
            .ok_or(embed::EmbedError::SurfaceUnavailable)
    }
}

#[cfg(feature = "hydrate")]
impl embed::EmbedSurface for IframeSurface {
    fn navigate(&self, url: &str) -> Result<(), embed::EmbedError> {
        self.element()?.set_src(url);
        Ok(())
    }

    fn post_message(
        &self,
        message: &embed::RetargetMessage,
        target_origin: &str,
    ) -> Result<(), embed::EmbedError> {
        let window = self
            .element()?
            .content_window()
            .ok_or(embed::EmbedError::SurfaceUnavailable)?;
        let json = serde_json::to_string(message)
            .map_err(|e| embed::EmbedError::MessageFailed(e.to_string()))?;
        let payload = js_sys::JSON::parse(&json)
            .map_err(|_| embed::EmbedError::MessageFailed("payload conversion failed".to_owned()))?;
        window
            .post_message(&payload, target_origin)
            .map_err(|_| embed::EmbedError::MessageFailed("postMessage rejected".to_owned()))
    }
}

/// Window-level `message` listener, installed for the panel's lifetime.
/// Events from any origin other than the configured instance URL are
/// silently discarded.
#[cfg(feature = "hydrate")]
fn install_message_listener(config: RwSignal<ConfigState>) {
    use wasm_bindgen::closure::Closure;

    let callback =
        Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |event: web_sys::MessageEvent| {
            let expected = config.get_untracked().instance_url;
            if event.origin() != expected {
                return;
            }
            let payload = js_sys::JSON::stringify(&event.data())
                .ok()
                .and_then(|s| s.as_string())
                .unwrap_or_else(|| "<unserializable>".to_owned());
            log::info!("message from trace viewer: {payload}");
        });

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("message", callback.as_ref().unchecked_ref());
    }

    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("message", callback.as_ref().unchecked_ref());
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn install_message_listener(_config: RwSignal<ConfigState>) {}

#[cfg(feature = "hydrate")]
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[cfg(not(feature = "hydrate"))]
fn viewport_width() -> f64 {
    0.0
}

#[cfg(feature = "hydrate")]
fn embed_loaded() {
    log::info!("trace embed loaded");
}

#[cfg(not(feature = "hydrate"))]
fn embed_loaded() {}
