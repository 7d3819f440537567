//! Per-position verdicts and attempts

use super::CharState;

/// Classification of one guessed position, plus the character used for
/// color-keying downstream
///
/// `ch` is not always the guessed character: an `OutOfPlace` verdict
/// records the solution's character at the slot it was matched against.
/// `NotUsed` verdicts carry no character, so exempt positions never color
/// the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub state: CharState,
    pub ch: Option<char>,
}

impl Verdict {
    /// Create a new verdict
    #[inline]
    #[must_use]
    pub const fn new(state: CharState, ch: Option<char>) -> Self {
        Self { state, ch }
    }
}

/// One full guess's verdicts, in position order
pub type Attempt = Vec<Verdict>;
