use chart_overlay::OverlayError;
use chart_overlay::api::{
    InteractivityShell, NullHost, OverlayConfig, OverlayFeature, OverlayFeatures,
};
use chart_overlay::core::{DataPoint, Point, Size};
use chart_overlay::extensions::ComparisonSeries;
use chart_overlay::interaction::PointerOutcome;

fn build_shell(features: OverlayFeatures) -> InteractivityShell<(), NullHost> {
    let config = OverlayConfig::new(Size::new(800.0, 400.0)).with_features(features);
    let mut shell = InteractivityShell::new((), NullHost, config).expect("shell init");
    shell
        .set_data(vec![DataPoint::new("p1", "Jan", 1.0).with_editable(true)])
        .expect("set data");
    shell
}

#[test]
fn all_features_disabled_rejects_every_feature_operation() {
    let mut shell = build_shell(OverlayFeatures::none());

    assert_eq!(
        shell.open_annotation_composer(),
        Err(OverlayError::FeatureDisabled(OverlayFeature::Annotations))
    );
    assert_eq!(
        shell.edit_data_point("p1"),
        Err(OverlayError::FeatureDisabled(OverlayFeature::DataEditing))
    );
    assert_eq!(
        shell.drill_down("region"),
        Err(OverlayError::FeatureDisabled(OverlayFeature::DrillDown))
    );
    assert_eq!(
        shell.add_comparison_series(ComparisonSeries::new("s", "S", Vec::new())),
        Err(OverlayError::FeatureDisabled(OverlayFeature::Comparison))
    );

    let toolbar = shell.toolbar();
    assert!(toolbar.annotations.is_none());
    assert!(toolbar.drill_down.is_none());
    assert!(toolbar.comparison.is_none());
    assert!(!toolbar.data_editing);
}

#[test]
fn zoom_and_pan_stay_available_without_features() {
    let mut shell = build_shell(OverlayFeatures::none());
    shell.zoom_in();
    assert_eq!(shell.toolbar().zoom_percent, 110);
    assert_eq!(
        shell.pointer_down(Point::new(1.0, 1.0)).expect("pan"),
        PointerOutcome::PanStarted
    );
}

#[test]
fn disabled_annotations_do_not_capture_pointer_presses() {
    let mut shell = build_shell(OverlayFeatures::default());
    shell.open_annotation_composer().expect("open");
    shell.set_annotation_text("kept");
    shell.confirm_annotation_text().expect("armed");
    shell.place_annotation(Point::new(10.0, 10.0)).expect("place");

    let mut disabled =
        build_shell(OverlayFeatures::default().with(OverlayFeature::Annotations, false));
    disabled
        .load_annotations(shell.annotations().iter().cloned().collect())
        .expect("load");
    assert_eq!(
        disabled.pointer_down(Point::new(20.0, 20.0)).expect("pan"),
        PointerOutcome::PanStarted
    );
    assert!(disabled.frame().annotations.is_empty());
}

#[test]
fn enabling_a_single_feature_exposes_only_its_section() {
    let shell = build_shell(OverlayFeatures::none().with(OverlayFeature::Comparison, true));
    let toolbar = shell.toolbar();
    assert!(toolbar.comparison.is_some());
    assert!(toolbar.annotations.is_none());
    assert!(toolbar.drill_down.is_none());
    assert!(!toolbar.data_editing);
}
