//! Command implementations

pub mod check;
pub mod generate;
pub mod play;

pub use check::{CheckResult, check_guess};
pub use generate::{GenerateResult, generate_puzzles};
pub use play::{MAX_ATTEMPTS, run_play};
