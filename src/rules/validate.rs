//! Equation validation against a hidden solution
//!
//! Classifies each guessed character with Wordle-style matching rules,
//! extended with the hard-mode forbidden-position relaxation.

use crate::core::{CharState, Difficulty, Equation, Verdict};
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for validation contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    LengthMismatch { guess: usize, solution: usize },
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, solution } => write!(
                f,
                "Guess length {guess} does not match solution length {solution}"
            ),
        }
    }
}

impl std::error::Error for ValidateError {}

/// Classify every character of `guess` against `solution`
///
/// Returns one [`Verdict`] per guessed position, in position order.
/// Duplicate characters follow multiset semantics: a character appearing
/// k times in the solution satisfies at most k guessed occurrences across
/// `Correct` and `OutOfPlace` combined.
///
/// On [`Difficulty::Hard`], digits in the guess name 1-based positions
/// that are exempt from matching: those positions default to `NotUsed`
/// instead of `Wrong`, are skipped by both matching passes, and an
/// out-of-place match is suppressed entirely when the matched digit's
/// numeric value is itself one of the exempt 0-based indices. The value
/// check is asymmetric with the index derivation on purpose; it is part
/// of the difficulty tuning.
///
/// # Errors
/// Returns `ValidateError::LengthMismatch` if the two equations differ in
/// length.
///
/// # Examples
/// ```
/// use mathdle::core::{CharState, Difficulty, Equation};
/// use mathdle::rules::validate;
///
/// let guess = Equation::new("12+3=15").unwrap();
/// let solution = Equation::new("10+3=13").unwrap();
/// let verdicts = validate(&guess, &solution, Difficulty::Easy).unwrap();
///
/// assert_eq!(verdicts.len(), 7);
/// assert_eq!(verdicts[0].state, CharState::Correct);
/// assert_eq!(verdicts[1].state, CharState::Wrong);
/// ```
pub fn validate(
    guess: &Equation,
    solution: &Equation,
    difficulty: Difficulty,
) -> Result<Vec<Verdict>, ValidateError> {
    if guess.len() != solution.len() {
        return Err(ValidateError::LengthMismatch {
            guess: guess.len(),
            solution: solution.len(),
        });
    }

    let hard = difficulty == Difficulty::Hard;
    let forbidden = if hard {
        forbidden_indices(guess)
    } else {
        FxHashSet::default()
    };

    // Falls back to Wrong; hard-mode exempt positions fall back to NotUsed
    let mut verdicts: Vec<Verdict> = guess
        .chars()
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            if forbidden.contains(&i) {
                Verdict::new(CharState::NotUsed, None)
            } else {
                Verdict::new(CharState::Wrong, Some(ch))
            }
        })
        .collect();

    // Exact pre-check: a solved guess needs no consumption bookkeeping
    if guess.text() == solution.text() {
        for (verdict, &ch) in verdicts.iter_mut().zip(guess.chars()) {
            *verdict = Verdict::new(CharState::Correct, Some(ch));
        }
        return Ok(verdicts);
    }

    // Consumption slots: a matched character is nulled out on both sides
    // so it cannot be matched again
    let mut guess_slots: Vec<Option<char>> = guess.chars().iter().copied().map(Some).collect();
    let mut solution_slots: Vec<Option<char>> =
        solution.chars().iter().copied().map(Some).collect();

    // First pass: correct character in correct place
    for i in 0..guess.len() {
        if forbidden.contains(&i) {
            continue;
        }
        if guess_slots[i] == solution_slots[i] {
            verdicts[i] = Verdict::new(CharState::Correct, solution_slots[i]);
            guess_slots[i] = None;
            solution_slots[i] = None;
        }
    }

    // Second pass: out-of-place characters among what remains
    for i in 0..guess.len() {
        if forbidden.contains(&i) {
            continue;
        }
        let Some(ch) = guess_slots[i] else {
            continue;
        };
        let Some(slot) = solution_slots.iter().position(|&s| s == Some(ch)) else {
            continue;
        };
        // Hard-mode guard: a digit whose value names an exempt index
        // cannot be matched out of place
        if hard && ch.to_digit(10).is_some_and(|v| forbidden.contains(&(v as usize))) {
            continue;
        }

        verdicts[i] = Verdict::new(CharState::OutOfPlace, solution_slots[slot]);
        solution_slots[slot] = None;
        guess_slots[i] = None;
    }

    Ok(verdicts)
}

/// 0-based position indices the guess declares exempt from matching
///
/// Every nonzero digit `d` among the guess's characters contributes index
/// `d - 1`; the digit `0` names no valid 1-based position and contributes
/// nothing.
fn forbidden_indices(guess: &Equation) -> FxHashSet<usize> {
    guess
        .chars()
        .iter()
        .filter_map(|ch| ch.to_digit(10))
        .filter(|&d| d > 0)
        .map(|d| (d - 1) as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(text: &str) -> Equation {
        Equation::new(text).unwrap()
    }

    fn states(verdicts: &[Verdict]) -> Vec<CharState> {
        verdicts.iter().map(|v| v.state).collect()
    }

    #[test]
    fn validate_length_matches_guess() {
        let verdicts = validate(&eq("1+2=3"), &eq("2+1=3"), Difficulty::Easy).unwrap();
        assert_eq!(verdicts.len(), 5);
    }

    #[test]
    fn validate_length_mismatch_is_an_error() {
        let result = validate(&eq("1+2=3"), &eq("10+3=13"), Difficulty::Easy);
        assert_eq!(
            result,
            Err(ValidateError::LengthMismatch {
                guess: 5,
                solution: 7
            })
        );
    }

    #[test]
    fn validate_exact_guess_is_all_correct() {
        let verdicts = validate(&eq("12+3=15"), &eq("12+3=15"), Difficulty::Easy).unwrap();
        assert!(verdicts.iter().all(|v| v.state == CharState::Correct));
    }

    #[test]
    fn validate_exact_guess_all_correct_even_on_hard() {
        // The pre-check beats the forbidden-position defaults
        let verdicts = validate(&eq("1+2=3"), &eq("1+2=3"), Difficulty::Hard).unwrap();
        assert!(verdicts.iter().all(|v| v.state == CharState::Correct));
    }

    #[test]
    fn validate_spec_fixture_easy() {
        // 1 2 + 3 = 1 5   vs   1 0 + 3 = 1 3
        // Exact: positions 0, 2, 3, 4, 5. Neither '2' nor '5' survives
        // anywhere in the remaining solution chars ('0', '3' is consumed).
        let verdicts = validate(&eq("12+3=15"), &eq("10+3=13"), Difficulty::Easy).unwrap();
        assert_eq!(
            states(&verdicts),
            vec![
                CharState::Correct,
                CharState::Wrong,
                CharState::Correct,
                CharState::Correct,
                CharState::Correct,
                CharState::Correct,
                CharState::Wrong,
            ]
        );
    }

    #[test]
    fn validate_out_of_place_records_solution_char() {
        // '3' is guessed at position 0 but lives at position 4 in the
        // solution; the verdict carries the solution's character
        let verdicts = validate(&eq("3+1=4"), &eq("1+2=3"), Difficulty::Easy).unwrap();
        assert_eq!(verdicts[0].state, CharState::OutOfPlace);
        assert_eq!(verdicts[0].ch, Some('3'));
    }

    #[test]
    fn validate_duplicate_consumption() {
        // Solution has a single '1'; the exact match at position 0
        // consumes it, so the second guessed '1' cannot go out-of-place
        let verdicts = validate(&eq("1+1=2"), &eq("1+3=4"), Difficulty::Easy).unwrap();
        assert_eq!(verdicts[0].state, CharState::Correct);
        assert_eq!(verdicts[2].state, CharState::Wrong);
    }

    #[test]
    fn validate_multiset_law() {
        let guess = eq("11+1=13");
        let solution = eq("10+3=13");
        let verdicts = validate(&guess, &solution, Difficulty::Easy).unwrap();

        for probe in "0123456789+-*/=".chars() {
            let matched = verdicts
                .iter()
                .zip(guess.chars())
                .filter(|&(ref v, &g)| {
                    g == probe
                        && matches!(v.state, CharState::Correct | CharState::OutOfPlace)
                })
                .count();
            let available = solution.chars().iter().filter(|&&s| s == probe).count();
            assert!(
                matched <= available,
                "char '{probe}' matched {matched} times but occurs {available} times"
            );
        }
    }

    #[test]
    fn validate_hard_marks_declared_positions_not_used() {
        // Guess digits {5, 1, 6} name exempt 0-based indices {4, 0} (5 is
        // out of range for a 5-char equation). Positions 0 and 4 default
        // to NotUsed and are skipped by both passes.
        let verdicts = validate(&eq("5+1=6"), &eq("2+4=6"), Difficulty::Hard).unwrap();
        assert_eq!(
            states(&verdicts),
            vec![
                CharState::NotUsed,
                CharState::Correct,
                CharState::Wrong,
                CharState::Correct,
                CharState::NotUsed,
            ]
        );
        assert_eq!(verdicts[0].ch, None);
        assert_eq!(verdicts[4].ch, None);
    }

    #[test]
    fn validate_hard_positions_stay_wrong_on_easy() {
        // Same pair without hard mode: no exemptions apply
        let verdicts = validate(&eq("5+1=6"), &eq("2+4=6"), Difficulty::Easy).unwrap();
        assert_eq!(
            states(&verdicts),
            vec![
                CharState::Wrong,
                CharState::Correct,
                CharState::Wrong,
                CharState::Correct,
                CharState::Correct,
            ]
        );
    }

    #[test]
    fn validate_hard_value_guard_suppresses_match() {
        // Guess digits {2, 3, 1, 4} name exempt indices {1, 2, 0, 3}, so
        // positions 0-3 default to NotUsed. At position 5 the guessed '2'
        // does occur in the solution, but its value 2 is itself an exempt
        // index, so the match is suppressed and the position stays Wrong.
        // The '4' at position 6 has value 4, which is not exempt, and is
        // matched out of place as usual.
        let verdicts = validate(&eq("23+1=24"), &eq("40+2=42"), Difficulty::Hard).unwrap();
        assert_eq!(
            states(&verdicts),
            vec![
                CharState::NotUsed,
                CharState::NotUsed,
                CharState::NotUsed,
                CharState::NotUsed,
                CharState::Correct,
                CharState::Wrong,
                CharState::OutOfPlace,
            ]
        );
        assert_eq!(verdicts[6].ch, Some('4'));
    }

    #[test]
    fn validate_all_states_in_range() {
        let verdicts = validate(&eq("36/6=15"), &eq("10+3=13"), Difficulty::Hard).unwrap();
        assert_eq!(verdicts.len(), 7);
        for v in &verdicts {
            assert!(matches!(
                v.state,
                CharState::Correct | CharState::OutOfPlace | CharState::Wrong | CharState::NotUsed
            ));
        }
    }

    #[test]
    fn forbidden_indices_ignore_zero_digit() {
        let set = forbidden_indices(&eq("10+3=13"));
        // Digits 1, 3 -> indices 0, 2; the '0' contributes nothing
        assert!(set.contains(&0));
        assert!(set.contains(&2));
        assert_eq!(set.len(), 2);
    }
}
