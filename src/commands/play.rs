//! Interactive play mode
//!
//! Text-based game loop: guess the generated equation within six
//! attempts, with colored feedback and keypad coloring after each guess.

use crate::core::{Attempt, Difficulty, Equation};
use crate::generator::generate;
use crate::output::display::{print_keypad, print_verdict_line};
use crate::rules::{KEYPAD_ROWS, layout, render_share_text, validate};
use std::io::{self, Write};

/// Maximum number of guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// Run the interactive play loop for one seed and difficulty
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(seed: u32, difficulty: Difficulty) -> Result<(), String> {
    let solution = solution_for(seed, difficulty);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Mathdle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden equation. Seed: {seed} ({difficulty:?})");
    println!(
        "The equation has {} characters from 0-9 + - * / =\n",
        solution.len()
    );
    println!("Commands: 'quit' to exit, 'new' to restart this round\n");

    let mut attempts: Vec<Attempt> = Vec::new();

    loop {
        let turn = attempts.len() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_ATTEMPTS}"))?;

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                attempts.clear();
                println!("\n🔄 Round restarted!\n");
                continue;
            }
            _ => {}
        }

        let guess = match Equation::new(input) {
            Ok(guess) => guess,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let verdicts = match validate(&guess, &solution, difficulty) {
            Ok(verdicts) => verdicts,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let solved = guess == solution;

        print_verdict_line(&guess, &verdicts);
        attempts.push(verdicts);
        print_keypad(&KEYPAD_ROWS, &layout(&KEYPAD_ROWS, &attempts));
        println!();

        if solved {
            use colored::Colorize;

            println!("{}", "═".repeat(62).bright_cyan());
            println!(
                "{}",
                format!(
                    " 🎉 Solved in {} {}! ",
                    attempts.len(),
                    if attempts.len() == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(62).bright_cyan());

            println!("\nShare your result:\n");
            println!("Mathdle {seed} ({difficulty:?}) {}/{MAX_ATTEMPTS}", attempts.len());
            for line in render_share_text(&attempts) {
                println!("{line}");
            }
            println!();
            return Ok(());
        }

        if attempts.len() >= MAX_ATTEMPTS {
            println!("❌ Out of guesses! The equation was: {solution}\n");
            return Ok(());
        }
    }
}

/// The tier's solution for a seed
fn solution_for(seed: u32, difficulty: Difficulty) -> Equation {
    let puzzles = generate(seed);
    match difficulty {
        Difficulty::Easy => puzzles.easy,
        Difficulty::Medium => puzzles.medium,
        Difficulty::Hard => puzzles.hard,
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_for_picks_tier() {
        let puzzles = generate(42);
        assert_eq!(solution_for(42, Difficulty::Easy), puzzles.easy);
        assert_eq!(solution_for(42, Difficulty::Medium), puzzles.medium);
        assert_eq!(solution_for(42, Difficulty::Hard), puzzles.hard);
    }
}
