// File: crates/fitness-chart/src/record.rs
// Summary: Generation record model and the whitespace-token loader for fitness logs.
// Notes:
// - A usable line has at least MIN_TOKENS whitespace-separated tokens; shorter
//   lines are skipped without being reported.
// - Tokens at GENERATION_TOKEN, BEST_TOKEN and AVERAGE_TOKEN must parse as f64
//   (digit-group underscores allowed), otherwise the whole load fails.

use std::num::ParseFloatError;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

/// Lines with fewer tokens than this contribute no record.
pub const MIN_TOKENS: usize = 10;
/// Token index of the generation number.
pub const GENERATION_TOKEN: usize = 1;
/// Token index of the best fitness of the generation.
pub const BEST_TOKEN: usize = 5;
/// Token index of the average fitness of the generation.
pub const AVERAGE_TOKEN: usize = 9;

/// One parsed (generation, best fitness, average fitness) triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationRecord {
    pub generation: f64,
    pub best: f64,
    pub average: f64,
}

impl GenerationRecord {
    pub const fn new(generation: f64, best: f64, average: f64) -> Self {
        Self { generation, best, average }
    }

    /// Parse a single line. `Ok(None)` means the line is too short to be usable.
    /// `line_no` is only used for error reporting.
    pub fn from_line(line: &str, line_no: usize) -> Result<Option<Self>, LoadError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MIN_TOKENS {
            return Ok(None);
        }
        let field = |position: usize| -> Result<f64, LoadError> {
            let token = tokens[position];
            parse_number(token).map_err(|source| LoadError::InvalidNumber {
                line: line_no,
                position,
                token: token.to_string(),
                source,
            })
        };
        Ok(Some(Self {
            generation: field(GENERATION_TOKEN)?,
            best: field(BEST_TOKEN)?,
            average: field(AVERAGE_TOKEN)?,
        }))
    }
}

/// Parse a float, also accepting single underscores between digits (`1_000.5`).
fn parse_number(token: &str) -> Result<f64, ParseFloatError> {
    if !token.contains('_') {
        return token.parse();
    }
    let bytes = token.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
    });
    if grouped {
        token.replace('_', "").parse()
    } else {
        token.parse()
    }
}

/// Parse every usable line of `text`, in input order.
pub fn parse_records(text: &str) -> Result<Vec<GenerationRecord>, LoadError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (i, line) in text.lines().enumerate() {
        match GenerationRecord::from_line(line, i + 1)? {
            Some(r) => records.push(r),
            None => skipped += 1,
        }
    }
    debug!(accepted = records.len(), skipped, "parsed fitness log");
    Ok(records)
}

/// Read the whole file at `path` and parse it.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<GenerationRecord>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text)
}

/// Split records into the aligned (generation, best, average) sequences.
pub fn columns(records: &[GenerationRecord]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(records.len());
    let mut y = Vec::with_capacity(records.len());
    let mut z = Vec::with_capacity(records.len());
    for r in records {
        x.push(r.generation);
        y.push(r.best);
        z.push(r.average);
    }
    (x, y, z)
}
