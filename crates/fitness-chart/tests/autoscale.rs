// File: crates/fitness-chart/tests/autoscale.rs
// Purpose: Validate autoscale and view navigation over both fitness series.

use fitness_chart::types::Insets;
use fitness_chart::view::AUTOSCALE_MARGIN;
use fitness_chart::{fitness_chart, Chart, Series, ViewState};

#[test]
fn autoscale_covers_both_series() {
    let chart = fitness_chart(&[0.0, 5.0], &[1.0, 6.0], &[0.5, 3.0], "t");

    assert!(chart.x_axis.min <= 0.0);
    assert!(chart.x_axis.max >= 5.0);
    // Y min from the average series, max from best.
    assert!(chart.y_axis.min <= 0.5);
    assert!(chart.y_axis.max >= 6.0);

    let span = 5.5;
    assert!((chart.y_axis.max - (6.0 + span * AUTOSCALE_MARGIN)).abs() < 1e-9);
}

#[test]
fn autoscale_without_margin_is_tight() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", fitness_chart::series::BEST_COLOR, vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.autoscale_axes(0.0);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 5.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (1.0, 3.0));
}

#[test]
fn empty_chart_gets_unit_view() {
    let chart = fitness_chart(&[], &[], &[], "");
    assert_eq!(ViewState::of_axes(&chart), ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
}

#[test]
fn single_record_is_widened() {
    let chart = fitness_chart(&[7.0], &[100.0], &[100.0], "");
    assert!(chart.x_axis.min < 7.0 && chart.x_axis.max > 7.0);
    assert!(chart.y_axis.min < 100.0 && chart.y_axis.max > 100.0);
}

#[test]
fn pan_and_zoom_round_trip_home() {
    let chart = fitness_chart(&[0.0, 10.0], &[0.0, 10.0], &[0.0, 5.0], "");
    let home = ViewState::from_chart(&chart);
    let insets = Insets::default();

    let mut v = home;
    v.pan_by_pixels(100.0, 0.0, 1000, 800, &insets);
    assert!(v.x_min < home.x_min, "dragging right reveals smaller x");
    assert!((v.y_min - home.y_min).abs() < 1e-12);

    let mut z = home;
    z.zoom_at_pixel(0.5, 500.0, 400.0, 1000, 800, &insets);
    assert!((z.x_max - z.x_min) < (home.x_max - home.x_min));

    let mut applied = chart.clone();
    z.apply_to_chart(&mut applied);
    assert_eq!(ViewState::of_axes(&applied), z);
}
