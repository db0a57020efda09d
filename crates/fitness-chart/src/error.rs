// File: crates/fitness-chart/src/error.rs
// Summary: Error type for loading fitness logs.

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or parsing a fitness log.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based, `position` is the 0-based token index on that line.
    #[error("line {line}: token {position} ('{token}') is not a number")]
    InvalidNumber {
        line: usize,
        position: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}
