//! Seven-segment display renderer
//!
//! Turns segment states into fixed-width text fragments. Each digit is
//! seven characters wide and seven rows tall:
//!
//! ```text
//!  ####       ####
//! #    #     #    #
//! #    #     #    #
//!             ####
//! #    #          #
//! #    #          #
//!  ####       ####
//! ```
//!
//! The vertical segments are two rows tall, so rows 1-2 and 4-5 always
//! carry identical fragments.

use std::io::Write;

use tracing::{debug, trace};

use super::buffer::{Fragments, RenderBuffer, FRAGMENT_WIDTH};
use crate::core::{BlockChar, Digit, Digits, Segments};
use crate::error::Result;

/// Renders numbers as seven-segment ASCII art
///
/// Holds only the block character; every render call builds a fresh
/// buffer, so one renderer can be reused freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SevenSegment {
    block: BlockChar,
}

impl SevenSegment {
    /// Create a renderer drawing lit pixels with `block`
    pub fn new(block: BlockChar) -> Self {
        Self { block }
    }

    /// Create a renderer using the full block glyph
    pub fn full_block() -> Self {
        Self::new(BlockChar::FULL)
    }

    /// The block character in use
    pub fn block(&self) -> BlockChar {
        self.block
    }

    /// Render a non-negative number
    pub fn render(&self, num: u64) -> RenderBuffer {
        self.render_digits(&Digits::from_unsigned(num))
    }

    /// Render a signed number, rejecting negatives
    pub fn render_signed(&self, num: i64) -> Result<RenderBuffer> {
        Ok(self.render_digits(&Digits::from_signed(num)?))
    }

    /// Render an already extracted digit sequence
    pub fn render_digits(&self, digits: &Digits) -> RenderBuffer {
        debug!(digits = digits.len(), block = %self.block, "rendering");

        let mut buffer = RenderBuffer::with_capacity(digits.len());
        for digit in digits.iter() {
            buffer.push(&self.render_digit(digit));
        }
        buffer
    }

    /// Render one digit into its seven row fragments
    pub fn render_digit(&self, digit: Digit) -> Fragments {
        let segments = Segments::for_digit(digit);
        trace!(digit = digit.value(), mask = segments.mask(), "segments");
        self.render_segments(&segments)
    }

    /// Render arbitrary segment states into seven row fragments
    pub fn render_segments(&self, s: &Segments) -> Fragments {
        let upper = self.vertical(s.b, s.c);
        let lower = self.vertical(s.e, s.f);
        [
            self.horizontal(s.a, s.b, s.c),
            upper.clone(),
            upper,
            self.middle(s.d),
            lower.clone(),
            lower,
            self.horizontal(s.g, s.e, s.f),
        ]
    }

    /// Render `num` and write it to `out`, followed by a newline
    pub fn print_to<W: Write>(&self, num: i64, out: &mut W) -> Result<()> {
        let buffer = self.render_signed(num)?;
        writeln!(out, "{}", buffer)?;
        Ok(())
    }

    /// Top or bottom row: a bar when its segment is lit, otherwise the
    /// ends of the adjoining verticals
    fn horizontal(&self, bar: bool, left: bool, right: bool) -> String {
        if bar {
            self.bar()
        } else {
            self.vertical(left, right)
        }
    }

    fn middle(&self, bar: bool) -> String {
        if bar {
            self.bar()
        } else {
            " ".repeat(FRAGMENT_WIDTH)
        }
    }

    fn vertical(&self, left: bool, right: bool) -> String {
        let b = self.block.as_char();
        match (left, right) {
            (true, true) => format!("{b}    {b} "),
            (true, false) => format!("{b}      "),
            (false, true) => format!("     {b} "),
            (false, false) => " ".repeat(FRAGMENT_WIDTH),
        }
    }

    fn bar(&self) -> String {
        format!(" {}  ", self.block.as_char().to_string().repeat(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    #[test]
    fn test_render_zero_digit() {
        let rows = SevenSegment::default().render_digit(digit(0));
        assert_eq!(
            rows,
            [
                " ####  ", "#    # ", "#    # ", "       ", "#    # ", "#    # ", " ####  ",
            ]
        );
    }

    #[test]
    fn test_render_one_digit() {
        let rows = SevenSegment::default().render_digit(digit(1));
        assert_eq!(
            rows,
            [
                "     # ", "     # ", "     # ", "       ", "     # ", "     # ", "     # ",
            ]
        );
    }

    #[test]
    fn test_render_eight_digit() {
        let rows = SevenSegment::default().render_digit(digit(8));
        assert_eq!(
            rows,
            [
                " ####  ", "#    # ", "#    # ", " ####  ", "#    # ", "#    # ", " ####  ",
            ]
        );
    }

    #[test]
    fn test_render_two_digit() {
        let rows = SevenSegment::default().render_digit(digit(2));
        assert_eq!(
            rows,
            [
                " ####  ", "     # ", "     # ", " ####  ", "#      ", "#      ", " ####  ",
            ]
        );
    }

    #[test]
    fn test_unlit_segments_render_blank() {
        let rows = SevenSegment::default().render_segments(&Segments::default());
        for row in rows {
            assert_eq!(row, "       ");
        }
    }

    #[test]
    fn test_fragment_width_stable() {
        for display in [SevenSegment::default(), SevenSegment::full_block()] {
            for d in Digit::all() {
                for row in display.render_digit(d) {
                    assert_eq!(row.chars().count(), FRAGMENT_WIDTH, "digit {}", d);
                }
            }
        }
    }

    #[test]
    fn test_vertical_rows_are_doubled() {
        for d in Digit::all() {
            let rows = SevenSegment::default().render_digit(d);
            assert_eq!(rows[1], rows[2]);
            assert_eq!(rows[4], rows[5]);
        }
    }

    #[test]
    fn test_full_block_glyph() {
        let rows = SevenSegment::full_block().render_digit(digit(7));
        assert_eq!(rows[0], " ████  ");
        assert!(!rows.iter().any(|row| row.contains('#')));
    }

    #[test]
    fn test_render_zero_number() {
        let buffer = SevenSegment::default().render(0);
        assert_eq!(buffer.digits(), 1);
        assert_eq!(buffer.row(0), Some(" ####  "));
    }

    #[test]
    fn test_render_signed_rejects_negative() {
        assert!(SevenSegment::default().render_signed(-1).is_err());
    }

    #[test]
    fn test_print_to_writes_trailing_newline() {
        let mut out = Vec::new();
        SevenSegment::default().print_to(1, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 7);
        assert!(text.ends_with("     # \n"));
    }
}
