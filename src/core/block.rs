//! Block character
//!
//! The glyph drawn for every lit pixel of a segment.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::error::{Error, Result};

/// Default block character
pub const DEFAULT_BLOCK_CHAR: char = '#';

/// Unicode FULL BLOCK (U+2588)
pub const FULL_BLOCK_CHAR: char = '\u{2588}';

/// A validated block glyph that occupies exactly one terminal column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct BlockChar(char);

impl BlockChar {
    /// `#`
    pub const DEFAULT: BlockChar = BlockChar(DEFAULT_BLOCK_CHAR);
    /// `█`
    pub const FULL: BlockChar = BlockChar(FULL_BLOCK_CHAR);

    /// Validate a glyph
    ///
    /// Rejects control characters, spaces and anything wider or narrower
    /// than one column, since those would break column alignment.
    pub fn new(c: char) -> Result<Self> {
        if c.is_whitespace() || c.is_control() || c.width() != Some(1) {
            return Err(Error::InvalidBlockChar(c));
        }
        Ok(Self(c))
    }

    /// The underlying character
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for BlockChar {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<char> for BlockChar {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Self::new(c)
    }
}

impl From<BlockChar> for char {
    fn from(block: BlockChar) -> Self {
        block.0
    }
}

impl fmt::Display for BlockChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
