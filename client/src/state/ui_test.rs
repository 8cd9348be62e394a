use super::*;

#[test]
fn show_status_replaces_the_previous_banner() {
    let mut ui = UiState::default();
    ui.show_status("first", StatusKind::Info);
    ui.show_status("second", StatusKind::Error);

    let status = ui.status.expect("banner present");
    assert_eq!(status.text, "second");
    assert_eq!(status.kind, StatusKind::Error);
}

#[test]
fn stale_dismiss_does_not_clear_a_newer_banner() {
    let mut ui = UiState::default();
    let first = ui.show_status("first", StatusKind::Info);
    let second = ui.show_status("second", StatusKind::Success);

    ui.dismiss_status(first);
    assert!(ui.status.is_some());

    ui.dismiss_status(second);
    assert!(ui.status.is_none());
}

#[test]
fn fullscreen_overrides_rendered_width_only() {
    let mut ui = UiState { panel_width_vw: 42.0, ..UiState::default() };
    assert!((ui.rendered_width_vw() - 42.0).abs() < f64::EPSILON);

    ui.fullscreen = true;
    assert!((ui.rendered_width_vw() - 100.0).abs() < f64::EPSILON);
    assert!((ui.panel_width_vw - 42.0).abs() < f64::EPSILON);
}

#[test]
fn panel_width_clamps_inclusive() {
    assert!((clamp_panel_width(10.0) - PANEL_MIN_VW).abs() < f64::EPSILON);
    assert!((clamp_panel_width(95.0) - PANEL_MAX_VW).abs() < f64::EPSILON);
    assert!((clamp_panel_width(55.5) - 55.5).abs() < f64::EPSILON);
}

#[test]
fn pointer_width_is_measured_from_the_right_edge() {
    // Pointer at 40% of the viewport leaves a 60%-wide panel.
    assert!((panel_width_from_pointer(400.0, 1000.0) - 60.0).abs() < f64::EPSILON);
}

#[test]
fn moves_before_pointer_down_leave_the_width_alone() {
    assert!((width_after_pointer_move(false, 50.0, 100.0, 1000.0) - 50.0).abs() < f64::EPSILON);
    assert!((width_after_pointer_move(true, 50.0, 100.0, 1000.0) - 80.0).abs() < f64::EPSILON);
}

#[test]
fn pointer_outside_the_viewport_still_clamps() {
    assert!((panel_width_from_pointer(-500.0, 1000.0) - PANEL_MAX_VW).abs() < f64::EPSILON);
    assert!((panel_width_from_pointer(2000.0, 1000.0) - PANEL_MIN_VW).abs() < f64::EPSILON);
    assert!((panel_width_from_pointer(100.0, 0.0) - PANEL_MIN_VW).abs() < f64::EPSILON);
}
