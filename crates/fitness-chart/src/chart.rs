// File: crates/fitness-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.
// Notes:
// - Every render call builds its own surface; a Chart carries no drawing state.

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::{Mapping, RectI32};
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::types::{pt_to_px, Insets, DPI, FONT_SIZE_PT, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::{Axis, Theme};

/// Approximate number of tick intervals per axis.
const TICK_TARGET: usize = 8;
/// Tick mark length in pixels.
const TICK_LEN: f32 = 4.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    /// Base font size in points; tick and axis labels use it, the title is 1.2x.
    pub font_size_pt: f32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    pub draw_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DPI,
            font_size_pt: FONT_SIZE_PT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            draw_grid: true,
        }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn font_px(&self) -> f32 {
        pt_to_px(self.font_size_pt, self.dpi)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding each side by `margin` times the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::fit(self, margin).apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart into a tightly packed RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None::<skia::ColorSpace>,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    /// Paint the whole chart onto `canvas`, which must be `opts.width` x `opts.height`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let map = Mapping {
            rect,
            x_min: self.x_axis.min,
            x_max: self.x_axis.max,
            y_min: self.y_axis.min,
            y_max: self.y_axis.max,
        };
        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, TICK_TARGET);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, TICK_TARGET);

        if opts.draw_grid {
            draw_grid(canvas, &map, &x_ticks, &y_ticks, theme.grid);
        }

        // Series, clipped to the plot area
        canvas.save();
        let clip = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        canvas.clip_rect(clip, skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &map, s);
        }
        canvas.restore();

        draw_frame(canvas, &map, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            let text = TextShaper::new();
            draw_labels(canvas, &text, &map, self, &x_ticks, &y_ticks, opts);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, map: &Mapping, x_ticks: &[f64], y_ticks: &[f64], color: skia::Color) {
    let paint = stroke_paint(color, 1.0);
    let r = map.rect;

    for &x in x_ticks {
        let px = map.x(x);
        canvas.draw_line((px, r.top as f32), (px, r.bottom as f32), &paint);
    }
    for &y in y_ticks {
        let py = map.y(y);
        canvas.draw_line((r.left as f32, py), (r.right as f32, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, map: &Mapping, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let r = map.rect;
    let axis_paint = stroke_paint(theme.axis_line, 1.0);
    let frame = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
    canvas.draw_rect(frame, &axis_paint);

    let tick_paint = stroke_paint(theme.tick, 1.0);
    for &x in x_ticks {
        let px = map.x(x);
        canvas.draw_line((px, r.bottom as f32), (px, r.bottom as f32 + TICK_LEN), &tick_paint);
    }
    for &y in y_ticks {
        let py = map.y(y);
        canvas.draw_line((r.left as f32 - TICK_LEN, py), (r.left as f32, py), &tick_paint);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    map: &Mapping,
    chart: &Chart,
    x_ticks: &[f64],
    y_ticks: &[f64],
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let r = map.rect;
    let size = opts.font_px();

    // Tick labels
    let x_step = nice_step(chart.x_axis.min, chart.x_axis.max, TICK_TARGET);
    let x_label_y = r.bottom as f32 + TICK_LEN + size;
    for &x in x_ticks {
        text.draw(canvas, &format_tick(x, x_step), map.x(x), x_label_y, size, theme.tick, Anchor::Center);
    }

    let y_step = nice_step(chart.y_axis.min, chart.y_axis.max, TICK_TARGET);
    let mut widest = 0.0f32;
    for &y in y_ticks {
        let label = format_tick(y, y_step);
        widest = widest.max(text.measure_width(&label, size));
        text.draw(canvas, &label, r.left as f32 - TICK_LEN - size * 0.4, map.y(y), size, theme.tick, Anchor::Right);
    }

    // Axis labels
    let mid_x = (r.left + r.right) as f32 * 0.5;
    let mid_y = (r.top + r.bottom) as f32 * 0.5;
    text.draw(canvas, &chart.x_axis.label, mid_x, x_label_y + size * 1.8, size, theme.axis_label, Anchor::Center);
    let y_label_x = r.left as f32 - TICK_LEN - size * 0.4 - widest - size * 1.2;
    text.draw_vertical(canvas, &chart.y_axis.label, y_label_x, mid_y, size, theme.axis_label);

    // Title
    if !chart.title.is_empty() {
        let title_size = size * 1.2;
        text.draw(canvas, &chart.title, mid_x, r.top as f32 - title_size, title_size, theme.title, Anchor::Center);
    }
}

fn draw_line_series(canvas: &skia::Canvas, map: &Mapping, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    // Non-finite points break the polyline instead of being drawn.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in data {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let p = (map.x(x), map.y(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    let stroke = stroke_paint(series.color, series.stroke_width);
    canvas.draw_path(&path, &stroke);
}
