//! End-to-end checks of the embedded figures against the render contract.

use benchplot::charts::{Annotation, Chart, ChartError, Marker, Series};
use benchplot::data::datasets;

fn throughput_chart() -> Chart {
    let mut chart = Chart::new(
        "Throughput vs Message Size (Threads = 8)",
        "Message Size (bytes)",
        "Throughput (Gbps)",
        vec![64.0, 256.0, 1024.0, 4096.0],
    );
    chart.add_series(Series::new(
        "A1 (two-copy)",
        Marker::Circle,
        vec![2.094, 8.197, 14.695, 26.937],
    ));
    chart.add_series(Series::new(
        "A2 (one-copy)",
        Marker::Square,
        vec![4.203, 14.882, 46.837, 87.664],
    ));
    chart.add_series(Series::new(
        "A3 (zero-copy)",
        Marker::Triangle,
        vec![2.081, 7.921, 28.183, 59.125],
    ));
    chart
}

#[test]
fn studied_variants_pass_all_pre_draw_checks() {
    let mut chart = throughput_chart();
    chart.set_annotation(Annotation::new(datasets::SYS_CONFIG, "bottom-right"));
    assert_eq!(chart.validate(), Ok(()));
}

#[test]
fn builtin_figures_match_the_hand_built_equivalent() {
    let built = datasets::throughput();
    assert_eq!(built.x_values, throughput_chart().x_values);
    assert_eq!(built.series, throughput_chart().series);
}

#[test]
fn a_short_series_is_rejected_with_the_offending_label() {
    let mut chart = throughput_chart();
    chart.add_series(Series::new(
        "A4 (speculative)",
        Marker::Circle,
        vec![1.0, 2.0, 3.0],
    ));
    match chart.validate() {
        Err(ChartError::ShapeMismatch {
            label,
            points,
            expected,
        }) => {
            assert_eq!(label, "A4 (speculative)");
            assert_eq!(points, 3);
            assert_eq!(expected, 4);
        }
        other => panic!("expected a shape mismatch, got {other:?}"),
    }
}

#[test]
fn an_unsupported_anchor_is_rejected_by_name() {
    let mut chart = throughput_chart();
    chart.set_annotation(Annotation::new(datasets::SYS_CONFIG, "top-left"));
    assert_eq!(
        chart.validate(),
        Err(ChartError::UnknownAnchor("top-left".to_string()))
    );
}

#[test]
fn validation_reports_the_first_broken_series() {
    let mut chart = Chart::new("broken", "x", "y", vec![1.0, 2.0]);
    chart.add_series(Series::new("fine", Marker::Circle, vec![1.0, 2.0]));
    chart.add_series(Series::new("short", Marker::Square, vec![1.0]));
    chart.add_series(Series::new("also short", Marker::Triangle, vec![2.0]));
    assert!(matches!(
        chart.validate(),
        Err(ChartError::ShapeMismatch { label, .. }) if label == "short"
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let shape = ChartError::ShapeMismatch {
        label: "A1 (two-copy)".to_string(),
        points: 3,
        expected: 4,
    };
    let text = shape.to_string();
    assert!(text.contains("A1 (two-copy)"));
    assert!(text.contains('3') && text.contains('4'));

    let anchor = ChartError::UnknownAnchor("upper-left".to_string());
    assert!(anchor.to_string().contains("upper-left"));
}

#[test]
fn axis_bounds_cover_the_data_and_are_reproducible() {
    for chart in datasets::all() {
        let bounds = chart.value_bounds();
        assert_eq!(bounds, chart.value_bounds(), "figure '{}'", chart.title);

        for &x in &chart.x_values {
            assert!(bounds.x_min < x && x < bounds.x_max, "figure '{}'", chart.title);
        }
        for series in &chart.series {
            for &y in &series.values {
                assert!(bounds.y_min < y && y < bounds.y_max, "figure '{}'", chart.title);
            }
        }
    }
}

#[test]
fn a_chart_without_annotation_is_still_valid() {
    assert_eq!(throughput_chart().validate(), Ok(()));
}
