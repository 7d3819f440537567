//! Guess checking command
//!
//! Validates a single guess against a known solution and returns the
//! per-character verdicts for display.

use crate::core::{Difficulty, Equation, Verdict};
use crate::rules::validate;

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Equation,
    pub solution: Equation,
    pub difficulty: Difficulty,
    pub verdicts: Vec<Verdict>,
    pub solved: bool,
}

/// Check a guess string against a solution string
///
/// # Errors
///
/// Returns an error if:
/// - Either string is not a well-formed equation
/// - The guess and solution differ in length
pub fn check_guess(
    guess: &str,
    solution: &str,
    difficulty: Difficulty,
) -> Result<CheckResult, String> {
    let guess = Equation::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let solution = Equation::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;

    let verdicts = validate(&guess, &solution, difficulty).map_err(|e| e.to_string())?;
    let solved = guess == solution;

    Ok(CheckResult {
        guess,
        solution,
        difficulty,
        verdicts,
        solved,
    })
}
