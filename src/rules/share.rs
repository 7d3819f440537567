//! Share-text rendering
//!
//! Maps attempt history to the glyph strings players paste into chats.

use crate::core::Attempt;

/// Render one glyph string per attempt, preserving attempt order
///
/// Each verdict contributes its state's glyph; `NotUsed` verdicts
/// contribute nothing, so they never leak into a finished attempt's
/// share text.
///
/// # Examples
/// ```
/// use mathdle::core::{Difficulty, Equation};
/// use mathdle::rules::{render_share_text, validate};
///
/// let guess = Equation::new("2+1=3").unwrap();
/// let solution = Equation::new("2+1=3").unwrap();
/// let attempt = validate(&guess, &solution, Difficulty::Easy).unwrap();
///
/// assert_eq!(render_share_text(&[attempt]), vec!["🟩🟩🟩🟩🟩"]);
/// ```
#[must_use]
pub fn render_share_text(attempts: &[Attempt]) -> Vec<String> {
    attempts
        .iter()
        .map(|attempt| {
            attempt
                .iter()
                .filter_map(|verdict| verdict.state.glyph())
                .collect()
        })
        .collect()
}
