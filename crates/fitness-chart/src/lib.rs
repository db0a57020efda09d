// File: crates/fitness-chart/src/lib.rs
// Summary: Core library entry point; fitness log loading and chart construction/rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod view;
pub mod theme;
pub mod text;
pub mod error;
pub mod record;
pub mod naming;
pub mod plot;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use error::LoadError;
pub use record::{columns, load_records, parse_records, GenerationRecord};
pub use plot::{fitness_chart, fitness_chart_from_records};
