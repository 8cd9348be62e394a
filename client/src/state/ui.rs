//! Transient status banner and embed-panel chrome state.
//!
//! DESIGN
//! ======
//! Presentation concerns (banner, panel width, fullscreen) stay out of the
//! domain state so fetch logic and embed targeting evolve independently of
//! rendering controls.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Seconds a status banner stays visible.
pub const STATUS_DISMISS_SECS: u64 = 5;

/// Inclusive lower bound for the embed panel width, in viewport-width percent.
pub const PANEL_MIN_VW: f64 = 30.0;

/// Inclusive upper bound for the embed panel width, in viewport-width percent.
pub const PANEL_MAX_VW: f64 = 80.0;

/// Visual flavor of a status banner message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// A transient banner message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Banner and embed-panel chrome state.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: Option<StatusMessage>,
    /// Bumped per status; the auto-dismiss timer only clears its own
    /// generation.
    status_seq: u64,
    /// Committed panel width in viewport-width percent.
    pub panel_width_vw: f64,
    pub fullscreen: bool,
    pub resizing: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: None,
            status_seq: 0,
            panel_width_vw: 50.0,
            fullscreen: false,
            resizing: false,
        }
    }
}

impl UiState {
    /// Show a banner, returning the generation the dismiss timer must
    /// present.
    pub fn show_status(&mut self, text: impl Into<String>, kind: StatusKind) -> u64 {
        self.status_seq += 1;
        self.status = Some(StatusMessage { text: text.into(), kind });
        self.status_seq
    }

    /// Dismiss the banner, but only while it is still generation `seq`.
    pub fn dismiss_status(&mut self, seq: u64) {
        if seq == self.status_seq {
            self.status = None;
        }
    }

    /// Width used for rendering: fullscreen overrides the committed width
    /// without changing it.
    #[must_use]
    pub fn rendered_width_vw(&self) -> f64 {
        if self.fullscreen { 100.0 } else { self.panel_width_vw }
    }
}

/// Clamp a candidate panel width to the allowed range.
#[must_use]
pub fn clamp_panel_width(vw: f64) -> f64 {
    vw.clamp(PANEL_MIN_VW, PANEL_MAX_VW)
}

/// Panel width implied by a pointer at `client_x` on a viewport
/// `viewport_width` wide; the panel is anchored to the right edge.
#[must_use]
pub fn panel_width_from_pointer(client_x: f64, viewport_width: f64) -> f64 {
    if viewport_width <= 0.0 {
        return PANEL_MIN_VW;
    }
    clamp_panel_width((viewport_width - client_x) / viewport_width * 100.0)
}

/// Width after a pointer move: unchanged unless a drag is active.
#[must_use]
pub fn width_after_pointer_move(
    resizing: bool,
    current_vw: f64,
    client_x: f64,
    viewport_width: f64,
) -> f64 {
    if resizing {
        panel_width_from_pointer(client_x, viewport_width)
    } else {
        current_vw
    }
}
