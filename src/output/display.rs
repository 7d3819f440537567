//! Display functions for command results

use super::formatters::verdicts_to_glyphs;
use crate::commands::{CheckResult, GenerateResult};
use crate::core::{CharState, Equation, Verdict};
use crate::rules::LayoutRow;
use colored::{ColoredString, Colorize};

fn colorize(ch: char, state: CharState) -> ColoredString {
    let text = ch.to_string();
    match state {
        CharState::Correct => text.bright_green().bold(),
        CharState::OutOfPlace => text.bright_yellow().bold(),
        CharState::Wrong => text.bright_white(),
        CharState::NotUsed => text.bright_black(),
    }
}

/// Print one guess with its per-character coloring
pub fn print_verdict_line(guess: &Equation, verdicts: &[Verdict]) {
    print!("  ");
    for (&ch, verdict) in guess.chars().iter().zip(verdicts) {
        print!("{} ", colorize(ch, verdict.state));
    }
    println!("  {}", verdicts_to_glyphs(verdicts));
}

/// Print the keypad rows with their best-known coloring
pub fn print_keypad(alphabet_rows: &[&str], rows: &[LayoutRow]) {
    for (alphabet, states) in alphabet_rows.iter().zip(rows) {
        print!("  ");
        for ch in alphabet.chars() {
            let state = states.get(&ch).copied().unwrap_or(CharState::NotUsed);
            print!("{} ", colorize(ch, state));
        }
        println!();
    }
}

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking {} against {} ({:?})",
        result.guess.text().bright_yellow().bold(),
        result.solution.text().bright_white(),
        result.difficulty
    );
    println!("{}", "─".repeat(60).cyan());

    print_verdict_line(&result.guess, &result.verdicts);

    println!();
    if result.solved {
        println!("{}", "✅ Solved!".green().bold());
    }
}

/// Print a generated puzzle set
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} {}", "PUZZLES FOR SEED".bright_cyan().bold(), result.seed);
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Easy:    {}",
        result.puzzles.easy.text().bright_green()
    );
    println!(
        "   Medium:  {}",
        result.puzzles.medium.text().bright_yellow()
    );
    println!("   Hard:    {}", result.puzzles.hard.text().bright_red());
    println!(
        "\nShare the seed; the same seed always produces these puzzles."
    );
}
