// File: crates/fitness-chart/src/plot.rs
// Summary: Builds the best/average fitness chart from aligned columns.

use crate::axis::{Axis, FITNESS_LABEL, GENERATION_LABEL};
use crate::record::{columns, GenerationRecord};
use crate::series::{Series, AVERAGE_COLOR, BEST_COLOR};
use crate::view::AUTOSCALE_MARGIN;
use crate::Chart;

/// Two-line chart: `best` (red) and `average` (blue) against `generations`.
/// Sequences of unequal length are paired up to the shorter one; empty input
/// still produces a chart with axes, labels and title.
pub fn fitness_chart(generations: &[f64], best: &[f64], average: &[f64], title: &str) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.x_axis = Axis::new(GENERATION_LABEL, 0.0, 1.0);
    chart.y_axis = Axis::new(FITNESS_LABEL, 0.0, 1.0);
    chart.add_series(Series::from_columns("best", BEST_COLOR, generations, best));
    chart.add_series(Series::from_columns("average", AVERAGE_COLOR, generations, average));
    chart.autoscale_axes(AUTOSCALE_MARGIN);
    chart
}

pub fn fitness_chart_from_records(records: &[GenerationRecord], title: &str) -> Chart {
    let (x, y, z) = columns(records);
    fitness_chart(&x, &y, &z, title)
}
