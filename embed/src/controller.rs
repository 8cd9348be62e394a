//! Surface-agnostic controller for the embedded trace viewer.
//!
//! DESIGN
//! ======
//! The hosting UI binds [`EmbedController`] to whatever renders the embed:
//! an iframe in the browser build, a recording mock in tests. The controller
//! owns the current target and decides, per target change, whether the
//! surface can be repointed in place (postMessage) or must be re-navigated.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::message::RetargetMessage;
use crate::target::TraceTarget;

/// Failure modes of embed-surface operations.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// The surface is not mounted or has no content window yet.
    #[error("embed surface unavailable")]
    SurfaceUnavailable,

    /// A message could not be delivered to the surface.
    #[error("embed message failed: {0}")]
    MessageFailed(String),
}

/// The rendered context hosting the third-party viewer.
pub trait EmbedSurface {
    /// Point the surface at a new URL (full navigation).
    fn navigate(&self, url: &str) -> Result<(), EmbedError>;

    /// Deliver a retarget message to the surface, scoped to `target_origin`.
    fn post_message(&self, message: &RetargetMessage, target_origin: &str)
    -> Result<(), EmbedError>;
}

/// Outcome of [`EmbedController::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbedUpdate {
    Unchanged,
    Retargeted,
    Reloaded,
}

/// Imperative handle over an open embed: retarget in place or reload.
pub struct EmbedController<S> {
    surface: S,
    target: TraceTarget,
}

impl<S: EmbedSurface> EmbedController<S> {
    pub fn new(surface: S, target: TraceTarget) -> Self {
        Self { surface, target }
    }

    #[must_use]
    pub fn target(&self) -> &TraceTarget {
        &self.target
    }

    /// Navigate the surface to the current target's URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface is unavailable.
    pub fn open(&self) -> Result<(), EmbedError> {
        self.surface.navigate(&self.target.trace_url())
    }

    /// Move the open viewer to another trace without reloading the surface.
    ///
    /// # Errors
    ///
    /// Returns an error when the message cannot be delivered.
    pub fn retarget(
        &mut self,
        root_span_id: impl Into<String>,
        selected_span_id: Option<String>,
    ) -> Result<(), EmbedError> {
        self.target.root_span_id = root_span_id.into();
        self.target.selected_span_id = selected_span_id;
        let message = self.target.retarget_message();
        self.surface.post_message(&message, &self.target.instance_url)
    }

    /// Re-navigate the surface to a freshly computed URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface is unavailable.
    pub fn reload(&self) -> Result<(), EmbedError> {
        self.surface.navigate(&self.target.trace_url())
    }

    /// Reconcile the surface with a new desired target: retarget in place
    /// when only the span selection changed, reload when the base
    /// configuration did, do nothing when the targets match.
    ///
    /// # Errors
    ///
    /// Propagates the underlying surface failure.
    pub fn apply(&mut self, next: TraceTarget) -> Result<EmbedUpdate, EmbedError> {
        if next == self.target {
            return Ok(EmbedUpdate::Unchanged);
        }
        if next.same_base(&self.target) {
            let root = next.root_span_id;
            let selected = next.selected_span_id;
            self.retarget(root, selected)?;
            Ok(EmbedUpdate::Retargeted)
        } else {
            self.target = next;
            self.reload()?;
            Ok(EmbedUpdate::Reloaded)
        }
    }

    /// Give the current target back to the caller, consuming the controller.
    #[must_use]
    pub fn into_target(self) -> TraceTarget {
        self.target
    }
}
