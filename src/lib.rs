//! Segmino
//!
//! Renders non-negative integers as seven-segment ASCII art, each digit
//! seven characters wide and seven rows tall, laid out side by side.
//!
//! - `core`: Digit extraction, segment decoding, block characters
//! - `render`: Row composition, render buffers, snapshots
//! - `app`: Configuration
//!
//! ```
//! use segmino::render::SevenSegment;
//!
//! let buffer = SevenSegment::default().render(42);
//! assert_eq!(buffer.rows().len(), 7);
//! assert_eq!(buffer.width(), 14);
//! ```

pub mod app;
pub mod core;
pub mod error;
pub mod render;

pub use error::{Error, Result};
pub use render::SevenSegment;
