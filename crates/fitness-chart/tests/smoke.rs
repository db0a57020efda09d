// File: crates/fitness-chart/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs from fitness logs.

use fitness_chart::naming::{chart_title, output_file_name, type_prefix};
use fitness_chart::{fitness_chart, fitness_chart_from_records, parse_records, RenderOptions};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

#[test]
fn render_fitness_log_png() {
    let log = (0..200)
        .map(|g| {
            let best = 1000.0 + (g as f64).sqrt() * 50.0;
            let avg = best * 0.7;
            format!("Generation: {g} | Best fitness: {best} | Average fitness: {avg}")
        })
        .collect::<Vec<_>>()
        .join("\n");
    let records = parse_records(&log).expect("parse");
    assert_eq!(records.len(), 200);

    let input = "pmx-run1-data.txt";
    let prefix = type_prefix(input);
    let chart = fitness_chart_from_records(&records, &chart_title(&prefix));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke").join(output_file_name(&prefix));
    chart.render_to_png(&opts, &out).expect("render should succeed");
    assert!(out.ends_with("pmx-visualization.png"));
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG header");
}

#[test]
fn empty_input_still_renders() {
    let records = parse_records("nothing usable here\n").expect("parse");
    let chart = fitness_chart_from_records(&records, &chart_title("pmx"));
    assert!(chart.series.iter().all(|s| s.is_empty()));

    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn mismatched_columns_pair_to_shorter() {
    let chart = fitness_chart(&[0.0, 1.0, 2.0], &[5.0, 6.0], &[1.0, 2.0, 3.0, 4.0], "t");
    assert_eq!(chart.series[0].len(), 2);
    assert_eq!(chart.series[1].len(), 3);
    chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
}

#[test]
fn default_canvas_is_ten_by_eight_inches() {
    let opts = RenderOptions::default();
    assert_eq!((opts.width, opts.height), (1000, 800));
    assert_eq!(opts.font_size_pt, 8.0);
}
