//! Rendering
//!
//! Composes segment states into fixed-width text rows.

mod buffer;
mod display;
mod snapshot;

pub use buffer::{Fragments, RenderBuffer, FRAGMENT_WIDTH, ROWS};
pub use display::SevenSegment;
pub use snapshot::{DigitSnapshot, Snapshot};
