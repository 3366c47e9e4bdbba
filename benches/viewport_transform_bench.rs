use chart_overlay::api::{InteractivityShell, NullHost, OverlayConfig};
use chart_overlay::core::{Point, Size, ViewportController};
use chart_overlay::extensions::Annotation;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn build_shell_with_annotations(count: usize) -> InteractivityShell<(), NullHost> {
    let mut shell =
        InteractivityShell::new((), NullHost, OverlayConfig::new(Size::new(1920.0, 1080.0)))
            .expect("shell init");
    for i in 0..count {
        shell.open_annotation_composer().expect("open composer");
        shell.set_annotation_text(format!("note {i}"));
        shell.confirm_annotation_text().expect("arm");
        let x = (i % 40) as f64 * 45.0;
        let y = (i / 40) as f64 * 20.0;
        shell.place_annotation(Point::new(x, y)).expect("place");
    }
    shell
}

fn bench_screen_chart_round_trip(c: &mut Criterion) {
    let mut viewport = ViewportController::new();
    viewport.zoom_in();
    viewport.zoom_in();
    viewport.begin_pan(Point::ORIGIN);
    viewport.update_pan(Point::new(-120.0, 48.0));
    let state = viewport.state();

    c.bench_function("screen_chart_round_trip", |b| {
        b.iter(|| {
            let chart = state.screen_to_chart(black_box(Point::new(812.5, 333.25)));
            let _ = state.chart_to_screen(chart);
        })
    });
}

fn bench_annotation_hit_test_500(c: &mut Criterion) {
    let shell = build_shell_with_annotations(500);

    c.bench_function("annotation_hit_test_500", |b| {
        b.iter(|| {
            let _ = shell
                .annotations()
                .annotation_at(black_box(Point::new(900.0, 120.0)));
        })
    });
}

fn bench_annotation_drag_move(c: &mut Criterion) {
    let mut shell = build_shell_with_annotations(50);
    let id = shell
        .annotations()
        .iter()
        .map(|annotation: &Annotation| annotation.id.clone())
        .next()
        .expect("at least one annotation");
    shell
        .start_annotation_drag(&id, Point::new(10.0, 10.0))
        .expect("drag start");

    c.bench_function("annotation_drag_move", |b| {
        let mut step = 0.0;
        b.iter(|| {
            step = (step + 1.0) % 1_000.0;
            let _ = shell.move_annotation_drag(black_box(Point::new(step, step * 0.5)));
        })
    });
}

fn bench_frame_and_snapshot_json_500(c: &mut Criterion) {
    let shell = build_shell_with_annotations(500);

    c.bench_function("overlay_frame_500", |b| {
        b.iter(|| {
            let _ = black_box(shell.frame());
        })
    });

    c.bench_function("overlay_snapshot_json_500", |b| {
        b.iter(|| {
            let _ = shell
                .snapshot()
                .to_json_contract_v1_pretty()
                .expect("snapshot json");
        })
    });
}

criterion_group!(
    benches,
    bench_screen_chart_round_trip,
    bench_annotation_hit_test_500,
    bench_annotation_drag_move,
    bench_frame_and_snapshot_json_500
);
criterion_main!(benches);
