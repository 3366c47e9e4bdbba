use chart_overlay::OverlayError;
use chart_overlay::api::{
    InteractivityShell, NullHost, OVERLAY_SNAPSHOT_JSON_SCHEMA_V1, OverlayConfig, OverlaySnapshot,
};
use chart_overlay::core::{Point, Size};
use chart_overlay::render::NullRenderer;

/// Stand-in for host chart content; the overlay never looks inside it.
#[derive(Debug, PartialEq)]
struct BarChartWidget {
    series: &'static str,
}

fn build_shell() -> InteractivityShell<BarChartWidget, NullHost> {
    let mut shell = InteractivityShell::new(
        BarChartWidget { series: "tickets" },
        NullHost,
        OverlayConfig::new(Size::new(900.0, 450.0)).with_author("ops"),
    )
    .expect("shell init");
    shell.open_annotation_composer().expect("open");
    shell.set_annotation_text("spike");
    shell.confirm_annotation_text().expect("arm");
    shell.place_annotation(Point::new(300.0, 150.0)).expect("place");
    shell.drill_down("emea").expect("drill");
    shell.zoom_in();
    shell
}

#[test]
fn snapshot_roundtrips_through_json_contract_v1() {
    let shell = build_shell();
    let snapshot = shell.snapshot();
    assert_eq!(snapshot.annotations.len(), 1);
    assert_eq!(snapshot.drill_path, vec!["emea".to_owned()]);
    assert!(!snapshot.drill_external);

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains(&format!(
        "\"schema_version\": {OVERLAY_SNAPSHOT_JSON_SCHEMA_V1}"
    )));
    assert!(json.contains("\"type\": \"note\""));

    let parsed = OverlaySnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = serde_json::to_string(&snapshot).expect("bare json");
    let parsed_bare = OverlaySnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed_bare, snapshot);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let shell = build_shell();
    let json = shell
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 7");
    let err = OverlaySnapshot::from_json_compat_str(&json).expect_err("version 7");
    assert!(matches!(err, OverlayError::InvalidData(_)));
}

#[test]
fn persisted_annotations_reload_into_a_fresh_shell() {
    let shell = build_shell();
    let snapshot = shell.snapshot();

    let mut restored = InteractivityShell::new(
        BarChartWidget { series: "tickets" },
        NullHost,
        OverlayConfig::new(Size::new(900.0, 450.0)),
    )
    .expect("shell init");
    restored
        .load_annotations(snapshot.annotations.clone())
        .expect("load");
    assert_eq!(restored.snapshot().annotations, snapshot.annotations);
}

#[test]
fn render_hands_content_and_frame_to_renderer() {
    let shell = build_shell();
    let mut renderer = NullRenderer::default();
    shell.render(&mut renderer).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_annotation_count, 1);
    assert_eq!(
        renderer.last_transform_css.as_deref(),
        Some("scale(1.1) translate(0px, 0px)")
    );
    assert_eq!(shell.content().series, "tickets");
}

#[test]
fn config_json_roundtrip_fills_defaults() {
    let config = OverlayConfig::from_json_str(r#"{"author":"support-lead"}"#).expect("parse");
    assert_eq!(config.author, "support-lead");
    assert!(config.features.enable_annotations);
    assert!(config.ignore_shortcuts_in_text_entry);

    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(OverlayConfig::from_json_str(&json).expect("reparse"), config);

    assert!(OverlayConfig::from_json_str(r#"{"author":"  "}"#).is_err());
    assert!(
        OverlayConfig::from_json_str(r#"{"container":{"width":-1.0,"height":10.0}}"#).is_err()
    );
}
