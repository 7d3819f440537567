//! Mathdle - CLI
//!
//! Arithmetic Wordle: validate guesses, color the keypad, and generate
//! shareable seeded puzzles.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mathdle::{
    commands::{check_guess, generate_puzzles, run_play},
    core::Difficulty,
    output::{print_check_result, print_generate_result},
};

#[derive(Parser)]
#[command(
    name = "mathdle",
    about = "Arithmetic Wordle: guess the hidden equation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (default), medium, hard
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Puzzle seed; shared seeds reproduce the same puzzles
        #[arg(short, long)]
        seed: Option<u32>,
    },

    /// Generate the three tier solutions for a seed
    Generate {
        /// Puzzle seed; random if omitted
        #[arg(short, long)]
        seed: Option<u32>,
    },

    /// Check a guess against a known solution
    Check {
        /// The guessed equation
        guess: String,

        /// The solution equation
        solution: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let difficulty = Difficulty::from_name(&cli.difficulty);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            run_play(seed, difficulty).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Generate { seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            let result = generate_puzzles(seed);
            print_generate_result(&result);
            Ok(())
        }
        Commands::Check { guess, solution } => {
            let result =
                check_guess(&guess, &solution, difficulty).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}
