// File: crates/fitness-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small fitness chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use fitness_chart::{fitness_chart, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(x: &[f64], y: &[f64], z: &[f64]) -> Vec<u8> {
    let chart = fitness_chart(x, y, z, "snapshot");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_fitness_chart() {
    let x: Vec<f64> = (0..50).map(|g| g as f64).collect();
    let best: Vec<f64> = x.iter().map(|g| 100.0 + 20.0 * (g + 1.0).ln()).collect();
    let avg: Vec<f64> = best.iter().enumerate().map(|(i, b)| b - 30.0 + (i % 5) as f64).collect();
    let bytes = render_bytes(&x, &best, &avg);

    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (1000, 800));

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/fitness_chart.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_empty_chart() {
    let bytes = render_bytes(&[], &[], &[]);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/empty_chart.png");
    write_or_compare(&path, &bytes);
}
