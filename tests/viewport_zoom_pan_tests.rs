use approx::assert_abs_diff_eq;
use chart_overlay::api::{InteractivityShell, NullHost, OverlayConfig};
use chart_overlay::core::{MAX_ZOOM, MIN_ZOOM, Point, Size, ViewportController};
use chart_overlay::interaction::{InteractionMode, PointerOutcome};

fn build_shell() -> InteractivityShell<(), NullHost> {
    InteractivityShell::new((), NullHost, OverlayConfig::new(Size::new(800.0, 400.0)))
        .expect("shell init")
}

#[test]
fn zoom_steps_by_a_tenth() {
    let mut viewport = ViewportController::new();
    viewport.zoom_in();
    assert_abs_diff_eq!(viewport.zoom(), 1.1, epsilon = 1e-12);
    viewport.zoom_out();
    viewport.zoom_out();
    assert_abs_diff_eq!(viewport.zoom(), 0.9, epsilon = 1e-12);
}

#[test]
fn zoom_is_clamped_at_both_ends() {
    let mut viewport = ViewportController::new();
    for _ in 0..40 {
        viewport.zoom_in();
    }
    assert_eq!(viewport.zoom(), MAX_ZOOM);

    for _ in 0..40 {
        viewport.zoom_out();
    }
    assert_eq!(viewport.zoom(), MIN_ZOOM);
}

#[test]
fn reset_restores_identity_and_drops_pan_session() {
    let mut viewport = ViewportController::new();
    viewport.zoom_in();
    viewport.begin_pan(Point::new(10.0, 10.0));
    viewport.update_pan(Point::new(60.0, -30.0));
    assert!(viewport.is_panning());

    viewport.reset();
    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!(viewport.pan(), Point::ORIGIN);
    assert!(!viewport.is_panning());
}

#[test]
fn pan_follows_cursor_delta_from_session_start() {
    let mut viewport = ViewportController::new();
    viewport.begin_pan(Point::new(100.0, 100.0));
    viewport.update_pan(Point::new(130.0, 90.0));
    viewport.update_pan(Point::new(150.0, 120.0));
    assert_eq!(viewport.pan(), Point::new(50.0, 20.0));
    assert!(viewport.end_pan());

    viewport.begin_pan(Point::new(0.0, 0.0));
    viewport.update_pan(Point::new(-10.0, 5.0));
    viewport.end_pan();
    assert_eq!(viewport.pan(), Point::new(40.0, 25.0));
}

#[test]
fn transform_translation_is_pan_over_zoom() {
    let mut viewport = ViewportController::new();
    for _ in 0..10 {
        viewport.zoom_in();
    }
    assert_abs_diff_eq!(viewport.zoom(), 2.0, epsilon = 1e-12);
    viewport.begin_pan(Point::ORIGIN);
    viewport.update_pan(Point::new(80.0, 40.0));

    let transform = viewport.transform();
    assert_abs_diff_eq!(transform.scale, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(transform.translate.x, 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(transform.translate.y, 20.0, epsilon = 1e-9);
}

#[test]
fn shell_pointer_drag_on_empty_surface_pans() {
    let mut shell = build_shell();

    let outcome = shell
        .pointer_down(Point::new(200.0, 200.0))
        .expect("pointer down");
    assert_eq!(outcome, PointerOutcome::PanStarted);
    assert!(outcome.starts_session());
    assert!(shell.wants_global_pointer_events());
    assert_eq!(shell.interaction_mode(), InteractionMode::Panning);

    assert!(shell.pointer_move(Point::new(260.0, 180.0)));
    assert!(shell.pointer_up().is_none());

    assert_eq!(shell.viewport_state().pan, Point::new(60.0, -20.0));
    assert!(!shell.wants_global_pointer_events());
    assert_eq!(shell.interaction_mode(), InteractionMode::Idle);
    assert!(!shell.pointer_move(Point::new(0.0, 0.0)));
}

#[test]
fn zoom_percent_is_reported_in_toolbar() {
    let mut shell = build_shell();
    shell.zoom_in();
    shell.zoom_in();
    assert_eq!(shell.toolbar().zoom_percent, 120);
    shell.reset_view();
    assert_eq!(shell.toolbar().zoom_percent, 100);
}
