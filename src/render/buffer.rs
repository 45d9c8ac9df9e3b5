//! Render buffer
//!
//! Seven text rows that grow left to right as digits are rendered.

use std::fmt;

/// Number of text rows in a rendered digit
pub const ROWS: usize = 7;

/// Width in characters of every fragment
pub const FRAGMENT_WIDTH: usize = 7;

/// The seven rows for one digit, top to bottom
pub type Fragments = [String; ROWS];

/// Accumulates fragments for a sequence of digits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderBuffer {
    rows: [String; ROWS],
    digits: usize,
}

impl RenderBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer sized for `digits` digits
    pub fn with_capacity(digits: usize) -> Self {
        Self {
            rows: std::array::from_fn(|_| String::with_capacity(digits * FRAGMENT_WIDTH)),
            digits: 0,
        }
    }

    /// Append one digit's fragments to the right edge
    pub fn push(&mut self, fragments: &Fragments) {
        for (row, fragment) in self.rows.iter_mut().zip(fragments) {
            row.push_str(fragment);
        }
        self.digits += 1;
    }

    /// Number of digits rendered so far
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Width of every row in characters
    pub fn width(&self) -> usize {
        self.digits * FRAGMENT_WIDTH
    }

    /// Get a row by index (0 = top)
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[String; ROWS] {
        &self.rows
    }

    /// Consume the buffer, returning its rows
    pub fn into_rows(self) -> [String; ROWS] {
        self.rows
    }
}

/// Rows joined with newlines, without a trailing newline
impl fmt::Display for RenderBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}
