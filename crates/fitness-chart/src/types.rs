// File: crates/fitness-chart/src/types.rs
// Summary: Shared types and constants (figure size, dpi, font size, paddings).

/// Figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 10.0;
/// Figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 8.0;
/// Pixels per inch used to rasterise the figure.
pub const DPI: f32 = 100.0;
/// Base font size in points.
pub const FONT_SIZE_PT: f32 = 8.0;

/// Default surface width in pixels.
pub const WIDTH: i32 = (FIGURE_WIDTH_IN * DPI) as i32;
/// Default surface height in pixels.
pub const HEIGHT: i32 = (FIGURE_HEIGHT_IN * DPI) as i32;

/// Convert a size in points to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / 72.0
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(125, 90, 90, 90)
    }
}
