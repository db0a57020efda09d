// File: crates/fitness-chart/src/series.rs
// Summary: Line series model (named XY polyline with a fixed stroke colour).

use skia_safe as skia;

/// Stroke of the best-fitness series (pure red).
pub const BEST_COLOR: skia::Color = skia::Color::RED;
/// Stroke of the average-fitness series (pure blue).
pub const AVERAGE_COLOR: skia::Color = skia::Color::BLUE;

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub color: skia::Color,
    pub stroke_width: f32,
}

impl Series {
    pub fn with_data(name: impl Into<String>, color: skia::Color, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, color, stroke_width: 1.5 }
    }

    /// Pair `xs` with `ys`; extra values in the longer slice are dropped.
    pub fn from_columns(name: impl Into<String>, color: skia::Color, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::with_data(name, color, data)
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// (x_min, x_max, y_min, y_max) over finite points, or `None` when there are none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(ax, bx, ay, by), &(x, y)| {
            (ax.min(x), bx.max(x), ay.min(y), by.max(y))
        }))
    }
}
