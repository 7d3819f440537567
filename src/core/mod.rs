//! Core domain types for Mathdle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod equation;
mod state;
mod verdict;

pub use equation::{Equation, EquationError};
pub use state::{CharState, Difficulty};
pub use verdict::{Attempt, Verdict};
