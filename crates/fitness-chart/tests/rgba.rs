// File: crates/fitness-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use fitness_chart::{fitness_chart, RenderOptions, Theme};

#[test]
fn render_rgba8_buffer() {
    let chart = fitness_chart(&[0.0, 4.0], &[0.0, 4.0], &[4.0, 0.0], "rgba");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel sits in the margin: opaque light background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn series_colours_reach_the_buffer() {
    // Flat lines through the middle of the plot: best above, average below.
    let chart = fitness_chart(&[0.0, 10.0], &[3.0, 3.0], &[1.0, 1.0], "colours");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.draw_grid = false;
    let (px, w, _h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    let column = (w / 2) as usize;
    let mut saw_red = false;
    let mut saw_blue = false;
    for row in px.chunks_exact(stride) {
        let p = &row[column * 4..column * 4 + 4];
        saw_red |= p[0] > 200 && p[1] < 128 && p[2] < 128;
        saw_blue |= p[2] > 200 && p[0] < 128 && p[1] < 128;
    }
    assert!(saw_red, "best series should be drawn in red");
    assert!(saw_blue, "average series should be drawn in blue");
}

#[test]
fn dark_theme_background() {
    let chart = fitness_chart(&[], &[], &[], "");
    let mut opts = RenderOptions::default().with_theme(Theme::dark());
    opts.draw_labels = false;
    let (px, ..) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}
