//! Equation representation
//!
//! An Equation stores a validated equation string over the Mathdle alphabet
//! (digits, the four operators, and a single `=`).

use std::fmt;

/// A validated Mathdle equation string
///
/// Stores the text alongside its characters for positional access. Length
/// is not fixed here: each difficulty tier produces its own length, fixed
/// within one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid equations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    Empty,
    InvalidCharacter(char),
    WrongEqualsCount(usize),
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Equation must not be empty"),
            Self::InvalidCharacter(ch) => {
                write!(f, "Equation contains invalid character '{ch}'")
            }
            Self::WrongEqualsCount(count) => {
                write!(f, "Equation must contain exactly one '=', got {count}")
            }
        }
    }
}

impl std::error::Error for EquationError {}

impl Equation {
    /// Create a new Equation from a string
    ///
    /// # Errors
    /// Returns `EquationError` if:
    /// - The string is empty
    /// - It contains characters outside `0123456789+-*/=`
    /// - It does not contain exactly one `=`
    ///
    /// # Examples
    /// ```
    /// use mathdle::core::Equation;
    ///
    /// let eq = Equation::new("12+3=15").unwrap();
    /// assert_eq!(eq.text(), "12+3=15");
    /// assert_eq!(eq.len(), 7);
    ///
    /// assert!(Equation::new("12+3").is_err());
    /// assert!(Equation::new("1a+3=4").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, EquationError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(EquationError::Empty);
        }

        if let Some(bad) = text
            .chars()
            .find(|&c| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '=')))
        {
            return Err(EquationError::InvalidCharacter(bad));
        }

        let equals = text.chars().filter(|&c| c == '=').count();
        if equals != 1 {
            return Err(EquationError::WrongEqualsCount(equals));
        }

        let chars: Vec<char> = text.chars().collect();

        Ok(Self { text, chars })
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Get the number of characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// An equation is never empty once constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_creation_valid() {
        let eq = Equation::new("12+3=15").unwrap();
        assert_eq!(eq.text(), "12+3=15");
        assert_eq!(eq.len(), 7);
        assert_eq!(eq.chars()[2], '+');
    }

    #[test]
    fn equation_all_operators_allowed() {
        assert!(Equation::new("8/4=2").is_ok());
        assert!(Equation::new("3*4=12").is_ok());
        assert!(Equation::new("9-5=4").is_ok());
        assert!(Equation::new("1+1=2").is_ok());
    }

    #[test]
    fn equation_negative_term_allowed() {
        // Generated two-sided equations can carry a negative right-hand term
        assert!(Equation::new("1-1=-9+9").is_ok());
    }

    #[test]
    fn equation_creation_empty() {
        assert!(matches!(Equation::new(""), Err(EquationError::Empty)));
    }

    #[test]
    fn equation_creation_invalid_character() {
        assert!(matches!(
            Equation::new("1a+3=4"),
            Err(EquationError::InvalidCharacter('a'))
        ));
        assert!(matches!(
            Equation::new("1 +3=4"),
            Err(EquationError::InvalidCharacter(' '))
        ));
    }

    #[test]
    fn equation_creation_wrong_equals_count() {
        assert!(matches!(
            Equation::new("12+3"),
            Err(EquationError::WrongEqualsCount(0))
        ));
        assert!(matches!(
            Equation::new("1=2=3"),
            Err(EquationError::WrongEqualsCount(2))
        ));
    }

    #[test]
    fn equation_display() {
        let eq = Equation::new("10+3=13").unwrap();
        assert_eq!(format!("{eq}"), "10+3=13");
    }

    #[test]
    fn equation_equality() {
        let a = Equation::new("1+2=3").unwrap();
        let b = Equation::new("1+2=3").unwrap();
        let c = Equation::new("2+1=3").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
