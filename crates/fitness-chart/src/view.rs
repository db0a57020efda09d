// File: crates/fitness-chart/src/view.rs
// First-class view state: visible ranges and helpers for pan/zoom/autoscale.

use crate::geometry::{clamp, RectI32};
use crate::types::Insets;
use crate::Chart;

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Autoscaled "home" view of the chart's data.
    pub fn from_chart(chart: &Chart) -> Self {
        Self::fit(chart, AUTOSCALE_MARGIN)
    }

    /// The ranges currently set on the chart's axes.
    pub fn of_axes(chart: &Chart) -> Self {
        Self {
            x_min: chart.x_axis.min,
            x_max: chart.x_axis.max,
            y_min: chart.y_axis.min,
            y_max: chart.y_axis.max,
        }
    }

    /// Bounding ranges of all series padded by `margin`. A chart without finite
    /// points gets the unit square; a zero-width range is widened around its value.
    pub fn fit(chart: &Chart, margin: f64) -> Self {
        let bounds = chart
            .series
            .iter()
            .filter_map(|s| s.bounds())
            .reduce(|(ax, bx, ay, by), (cx, dx, cy, dy)| (ax.min(cx), bx.max(dx), ay.min(cy), by.max(dy)));
        let Some((x_min, x_max, y_min, y_max)) = bounds else {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        };
        let (x_min, x_max) = pad(x_min, x_max, margin);
        let (y_min, y_max) = pad(y_min, y_max, margin);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, width: i32, height: i32, insets: &Insets) {
        let r = RectI32::plot_area(width, height, insets);
        let plot_w = (r.width() as f64).max(1.0);
        let plot_h = (r.height() as f64).max(1.0);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let wx = -dx / plot_w * x_span;
        let wy = dy / plot_h * y_span;
        self.x_min += wx; self.x_max += wx;
        self.y_min += wy; self.y_max += wy;
    }

    /// Zoom keeping the data point under the cursor fixed. Positive `scroll` zooms in.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, width: i32, height: i32, insets: &Insets) {
        let r = RectI32::plot_area(width, height, insets);
        let (l, rpx) = (r.left as f64, r.right as f64);
        let (t, bpx) = (r.top as f64, r.bottom as f64);
        let plot_w = (rpx - l).max(1.0); let plot_h = (bpx - t).max(1.0);
        let cx = clamp(cursor_x, l, rpx); let cy = clamp(cursor_y, t, bpx);
        let x_span = self.x_max - self.x_min; let y_span = self.y_max - self.y_min;
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor; let ny = y_span * factor;
        let rx = (wx - self.x_min) / x_span; let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx; self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny; self.y_min = self.y_max - ny;
    }
}

fn pad(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < 1e-9 {
        let half = if min.abs() > 1e-9 { min.abs() * margin.max(0.05) } else { 0.5 };
        return (min - half, max + half);
    }
    (min - span * margin, max + span * margin)
}
