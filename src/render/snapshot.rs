//! Render snapshots
//!
//! A serializable record of one render: the digits, the segment mask of
//! each, and the resulting rows. Given the same number and block
//! character the snapshot is always identical.

use serde::{Deserialize, Serialize};

use super::buffer::RenderBuffer;
use super::display::SevenSegment;
use crate::core::{Digit, Digits, Segments};

/// A complete snapshot of a rendered number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The number as decimal text
    pub number: String,
    /// Block character used for lit pixels
    pub block: char,
    /// Per-digit segment states
    pub digits: Vec<DigitSnapshot>,
    /// Rendered rows, top to bottom
    pub lines: Vec<String>,
}

/// Segment states of a single digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSnapshot {
    pub digit: Digit,
    /// 7-bit mask, `a` in bit 6 down to `g` in bit 0
    pub mask: u8,
}

impl Snapshot {
    /// Render `digits` with `display` and capture the result
    pub fn capture(display: &SevenSegment, digits: &Digits) -> Self {
        let buffer = display.render_digits(digits);
        Self::from_parts(display, digits, buffer)
    }

    fn from_parts(display: &SevenSegment, digits: &Digits, buffer: RenderBuffer) -> Self {
        Self {
            number: digits.to_string(),
            block: display.block().as_char(),
            digits: digits
                .iter()
                .map(|digit| DigitSnapshot {
                    digit,
                    mask: Segments::for_digit(digit).mask(),
                })
                .collect(),
            lines: buffer.into_rows().into_iter().collect(),
        }
    }

    /// Rows joined with newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
