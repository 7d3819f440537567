//! Mathdle
//!
//! The guessing-game core of an arithmetic Wordle variant: per-character
//! guess validation with a hard-mode twist, keypad layout aggregation,
//! and deterministic seeded puzzle generation.
//!
//! # Quick Start
//!
//! ```rust
//! use mathdle::core::{Difficulty, Equation};
//! use mathdle::generator::generate;
//! use mathdle::rules::validate;
//!
//! // The same seed always yields the same three puzzles
//! let puzzles = generate(42);
//!
//! // Classify a guess against the easy solution
//! let guess = Equation::new(puzzles.easy.text()).unwrap();
//! let verdicts = validate(&guess, &puzzles.easy, Difficulty::Easy).unwrap();
//! assert_eq!(verdicts.len(), puzzles.easy.len());
//! ```

// Core domain types
pub mod core;

// Validation, layout, and share rules
pub mod rules;

// Seeded puzzle generation
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
