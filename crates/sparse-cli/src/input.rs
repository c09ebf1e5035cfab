//! Plain-text matrix input.
//!
//! One matrix row per line, values separated by whitespace. Blank lines are
//! ignored so files may end with a trailing newline. Every token must parse
//! as a number; an empty cell is not treated as zero.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sparse_util::DenseMatrix;

/// Reads a dense matrix from a text file.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<DenseMatrix> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read matrix file: {}", path.as_ref().display()))?;
    parse_matrix(&text)
        .with_context(|| format!("Failed to parse matrix file: {}", path.as_ref().display()))
}

/// Parses a dense matrix from text, one row per line.
pub fn parse_matrix(text: &str) -> Result<DenseMatrix> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value: f64 = token
                .parse()
                .with_context(|| format!("Invalid number '{}' on line {}", token, lineno + 1))?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(DenseMatrix::from_rows(rows)?)
}
