//! Keypad layout aggregation
//!
//! Folds verdict history into a best-known state per character, one map
//! per keypad row.

use crate::core::{Attempt, CharState};
use rustc_hash::FxHashMap;

/// Keypad rows of the Mathdle alphabet, in display order
pub const KEYPAD_ROWS: [&str; 2] = ["0123456789", "+-*/="];

/// Best-known state per character for one keypad row
pub type LayoutRow = FxHashMap<char, CharState>;

/// Compute keypad coloring from the full attempt history
///
/// Every character of each row starts at `NotUsed` and only ever moves
/// toward `Correct` as verdicts are folded in (minimum under the
/// [`CharState`] ordering). Verdicts for characters outside a row, and
/// verdicts carrying no character, are ignored for that row. The fold is
/// order-independent, so recomputing from the full history on every
/// render is safe.
///
/// # Examples
/// ```
/// use mathdle::core::{CharState, Difficulty, Equation};
/// use mathdle::rules::{layout, validate, KEYPAD_ROWS};
///
/// let guess = Equation::new("1+2=3").unwrap();
/// let solution = Equation::new("2+1=3").unwrap();
/// let attempt = validate(&guess, &solution, Difficulty::Easy).unwrap();
///
/// let rows = layout(&KEYPAD_ROWS, &[attempt]);
/// assert_eq!(rows[1][&'+'], CharState::Correct);
/// assert_eq!(rows[0][&'9'], CharState::NotUsed);
/// ```
#[must_use]
pub fn layout(alphabet_rows: &[&str], attempts: &[Attempt]) -> Vec<LayoutRow> {
    alphabet_rows
        .iter()
        .map(|row| {
            let mut states: LayoutRow = row.chars().map(|c| (c, CharState::NotUsed)).collect();

            for attempt in attempts {
                for verdict in attempt {
                    let Some(ch) = verdict.ch else {
                        continue;
                    };
                    if let Some(best) = states.get_mut(&ch)
                        && verdict.state < *best
                    {
                        *best = verdict.state;
                    }
                }
            }

            states
        })
        .collect()
}
