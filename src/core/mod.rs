//! Display Core Module
//!
//! Platform-independent digit model. This module contains:
//! - Decimal digit extraction
//! - The seven-segment decoder
//! - Block character validation
//!
//! Everything here is pure: the same number always decodes to the same
//! digits and segment states.

mod block;
mod digits;
mod segments;

pub use block::{BlockChar, DEFAULT_BLOCK_CHAR, FULL_BLOCK_CHAR};
pub use digits::{Digit, Digits};
pub use segments::{Segments, SEGMENT_NAMES};
