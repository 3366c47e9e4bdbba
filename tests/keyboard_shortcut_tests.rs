use approx::assert_abs_diff_eq;
use chart_overlay::api::{
    InteractivityShell, NullHost, OverlayConfig, OverlayFeature, OverlayFeatures,
};
use chart_overlay::core::Point;
use chart_overlay::extensions::ComposerPhase;
use chart_overlay::interaction::{KeyInput, ShortcutAction};

fn build_shell(config: OverlayConfig) -> InteractivityShell<(), NullHost> {
    InteractivityShell::new((), NullHost, config).expect("shell init")
}

#[test]
fn shortcuts_only_fire_while_mounted() {
    let mut shell = build_shell(OverlayConfig::default());
    let zoom_in = KeyInput::new("+").with_ctrl();

    assert_eq!(shell.handle_key(&zoom_in), None);
    assert_eq!(shell.viewport_state().zoom, 1.0);

    shell.mount();
    assert!(shell.is_mounted());
    assert_eq!(shell.handle_key(&zoom_in), Some(ShortcutAction::ZoomIn));
    assert_abs_diff_eq!(shell.viewport_state().zoom, 1.1, epsilon = 1e-12);

    shell.unmount();
    assert!(!shell.is_mounted());
    assert_eq!(shell.handle_key(&zoom_in), None);
    assert_abs_diff_eq!(shell.viewport_state().zoom, 1.1, epsilon = 1e-12);
}

#[test]
fn ctrl_and_cmd_drive_zoom_and_reset() {
    let mut shell = build_shell(OverlayConfig::default());
    shell.mount();

    shell.handle_key(&KeyInput::new("=").with_meta());
    shell.handle_key(&KeyInput::new("+").with_ctrl());
    assert_abs_diff_eq!(shell.viewport_state().zoom, 1.2, epsilon = 1e-12);

    shell.handle_key(&KeyInput::new("-").with_meta());
    assert_abs_diff_eq!(shell.viewport_state().zoom, 1.1, epsilon = 1e-12);

    shell.pointer_down(Point::new(0.0, 0.0)).expect("pan");
    shell.pointer_move(Point::new(30.0, 30.0));
    shell.pointer_up();

    assert_eq!(
        shell.handle_key(&KeyInput::new("0").with_ctrl()),
        Some(ShortcutAction::ResetView)
    );
    assert_eq!(shell.viewport_state().zoom, 1.0);
    assert_eq!(shell.viewport_state().pan, Point::ORIGIN);
}

#[test]
fn ctrl_a_opens_the_annotation_composer() {
    let mut shell = build_shell(OverlayConfig::default());
    shell.mount();
    assert_eq!(
        shell.handle_key(&KeyInput::new("a").with_ctrl()),
        Some(ShortcutAction::OpenAnnotationComposer)
    );
    assert_eq!(shell.annotations().composer_phase(), ComposerPhase::Composing);
}

#[test]
fn shortcuts_are_ignored_inside_text_entry() {
    let mut shell = build_shell(OverlayConfig::default());
    shell.mount();
    assert_eq!(
        shell.handle_key(&KeyInput::new("a").with_ctrl().in_text_entry()),
        None
    );
    assert_eq!(shell.annotations().composer_phase(), ComposerPhase::Idle);

    let mut unguarded =
        build_shell(OverlayConfig::default().with_shortcut_text_entry_guard(false));
    unguarded.mount();
    assert_eq!(
        unguarded.handle_key(&KeyInput::new("0").with_ctrl().in_text_entry()),
        Some(ShortcutAction::ResetView)
    );
}

#[test]
fn composer_shortcut_is_dropped_when_annotations_are_disabled() {
    let features = OverlayFeatures::default().with(OverlayFeature::Annotations, false);
    let mut shell = build_shell(OverlayConfig::default().with_features(features));
    shell.mount();
    assert_eq!(shell.handle_key(&KeyInput::new("a").with_ctrl()), None);
    assert_eq!(shell.annotations().composer_phase(), ComposerPhase::Idle);
    assert_eq!(
        shell.handle_key(&KeyInput::new("+").with_ctrl()),
        Some(ShortcutAction::ZoomIn)
    );
}

#[test]
fn escape_closes_composer_and_reports_nothing_when_idle() {
    let mut shell = build_shell(OverlayConfig::default());
    shell.mount();
    shell.open_annotation_composer().expect("open");
    assert_eq!(
        shell.handle_key(&KeyInput::new("Escape")),
        Some(ShortcutAction::Cancel)
    );
    assert_eq!(shell.annotations().composer_phase(), ComposerPhase::Idle);
    assert_eq!(shell.handle_key(&KeyInput::new("Escape")), None);
}
