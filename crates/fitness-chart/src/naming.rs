// File: crates/fitness-chart/src/naming.rs
// Summary: Chart titles and output file names derived from the input file name.

use std::path::Path;

/// Experiment parameters appended to every title.
pub const TITLE_SUFFIX: &str =
    ", 1000pop, 0.1 item chance, 0.05 mutation chance, 10.0 v_max, 0.1 v_min, 280_000 max_weight";

/// Suffix of the rendered image name.
pub const OUTPUT_SUFFIX: &str = "-visualization.png";

/// Run type shown by the window front-end.
pub const LITERAL_TYPE: &str = "pmx";

/// Input read by the window front-end when no path is given.
pub const DEFAULT_INPUT: &str = "pmx-data.txt";

/// Run type of an input file: its base name up to the first hyphen.
/// A name without a hyphen is returned whole.
pub fn type_prefix(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    match name.split_once('-') {
        Some((prefix, _)) => prefix.to_string(),
        None => name,
    }
}

pub fn chart_title(prefix: &str) -> String {
    format!("{}{}", prefix.to_uppercase(), TITLE_SUFFIX)
}

pub fn literal_title() -> String {
    chart_title(LITERAL_TYPE)
}

pub fn output_file_name(prefix: &str) -> String {
    format!("{prefix}{OUTPUT_SUFFIX}")
}
