// File: crates/fitness-plot/src/main.rs
// Summary: Loads a GA fitness log and renders best/average fitness per generation to a PNG
//          named after the input's run type (e.g. `pmx-run1-data.txt` -> `pmx-visualization.png`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fitness_chart::naming::{chart_title, output_file_name, type_prefix};
use fitness_chart::{fitness_chart_from_records, load_records, theme, RenderOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fitness-plot")]
#[command(about = "Plot best and average fitness per generation from a GA log", long_about = None)]
struct Cli {
    /// Fitness log; its name up to the first '-' becomes the run type
    input: PathBuf,
    /// Directory the PNG is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Colour preset (light, dark, solarized-light)
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}

/// Load `cli.input`, render it and return the path of the written PNG.
fn run(cli: &Cli) -> Result<PathBuf> {
    info!("Using input file: {}", cli.input.display());

    let records = load_records(&cli.input)
        .with_context(|| format!("failed to load fitness log '{}'", cli.input.display()))?;
    info!("Loaded {} generation records", records.len());

    let prefix = type_prefix(&cli.input);
    let chart = fitness_chart_from_records(&records, &chart_title(&prefix));

    let opts = RenderOptions::default().with_theme(theme::find(&cli.theme));
    let out = cli.out_dir.join(output_file_name(&prefix));
    chart
        .render_to_png(&opts, &out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    info!("Wrote {}", out.display());

    Ok(out)
}
