//! Character classification states and difficulty tiers

/// Classification of one guessed character position
///
/// The discriminant order is load-bearing: smaller means "more correct",
/// and the layout aggregator keeps the minimum state ever seen per
/// character. `NotUsed` is both the keypad default and the hard-mode
/// marker for positions the guess declared unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharState {
    /// Correct character in the correct position
    Correct = 0,
    /// Character exists in the solution, but at another position
    OutOfPlace = 1,
    /// Character does not appear at a matchable position
    Wrong = 2,
    /// Character not yet used, or position exempt from matching
    NotUsed = 3,
}

impl CharState {
    /// Share glyph for this state
    ///
    /// `NotUsed` has no glyph: exempt positions never appear in a finished
    /// attempt's share rendering.
    #[must_use]
    pub const fn glyph(self) -> Option<char> {
        match self {
            Self::Correct => Some('🟩'),
            Self::OutOfPlace => Some('🟨'),
            Self::Wrong => Some('⬜'),
            Self::NotUsed => None,
        }
    }
}

/// Puzzle difficulty tier
///
/// Tiers select which generated solution is played. `Hard` additionally
/// changes validation: digits in the guess mark 1-based positions as
/// exempt from matching (see `rules::validate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Create a difficulty from a name string
    ///
    /// Supported names: "easy", "medium", "hard" (or their first letters).
    /// Defaults to easy if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "medium" | "m" => Self::Medium,
            "hard" | "h" => Self::Hard,
            _ => Self::Easy,
        }
    }
}
