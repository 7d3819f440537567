//! The Mathdle rule engine
//!
//! Pure functions over core types: guess validation, keypad layout
//! aggregation, and share-text rendering.

mod layout;
mod share;
mod validate;

pub use layout::{KEYPAD_ROWS, LayoutRow, layout};
pub use share::render_share_text;
pub use validate::{ValidateError, validate};
