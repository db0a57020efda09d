// File: crates/fitness-chart/src/geometry.rs
// Summary: Plot-area rectangle and the data-to-pixel mapping used by the renderer and view.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    /// Plot area of a `width` x `height` surface after removing `insets`.
    /// Never collapses below one pixel in either direction.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Linear mapping from data ranges onto a plot rectangle (y grows upwards).
#[derive(Clone, Copy, Debug)]
pub struct Mapping {
    pub rect: RectI32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Mapping {
    #[inline]
    pub fn x(&self, x: f64) -> f32 {
        let span = (self.x_max - self.x_min).max(1e-9);
        self.rect.left as f32 + ((x - self.x_min) / span) as f32 * self.rect.width() as f32
    }
    #[inline]
    pub fn y(&self, y: f64) -> f32 {
        let span = (self.y_max - self.y_min).max(1e-9);
        self.rect.bottom as f32 - ((y - self.y_min) / span) as f32 * self.rect.height() as f32
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
