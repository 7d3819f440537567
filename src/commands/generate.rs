//! Puzzle generation command
//!
//! Produces the three tier solutions for a seed so games can be shared.

use crate::generator::{PuzzleSet, generate};

/// Result of generating a puzzle set
pub struct GenerateResult {
    pub seed: u32,
    pub puzzles: PuzzleSet,
}

/// Generate the puzzle set for a seed
///
/// The seed is echoed back in the result so callers can print it for
/// sharing; two players given the same seed see the same three puzzles.
#[must_use]
pub fn generate_puzzles(seed: u32) -> GenerateResult {
    GenerateResult {
        seed,
        puzzles: generate(seed),
    }
}
