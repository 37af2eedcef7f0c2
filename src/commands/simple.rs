//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::{Locale, SpellChecker};
use crate::engine::{SubmitResult, WordGame};
use crate::output::display::{print_round, print_used_words};
use crate::wordlists::RootWordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the first round cannot get a root word or if there's an I/O
/// error reading user input.
pub fn run_simple<W, C>(source: &W, checker: &C, locale: &Locale) -> Result<()>
where
    W: RootWordSource + ?Sized,
    C: SpellChecker + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell as many words as you can from the letters of the root word.");
    println!("Every accepted word scores one point per letter.\n");
    println!("Commands: '/new' for a new root word, '/words' to list your words, '/quit' to exit\n");

    let mut game = WordGame::new().with_locale(locale.clone());
    print_round(game.start_round_from(source)?);

    loop {
        let Some(input) = read_input("Enter your word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.as_str() {
            "/quit" | "/q" | "/exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "/new" | "/restart" => match game.start_round_from(source) {
                Ok(round) => {
                    println!("\n🔄 New round started!");
                    print_round(round);
                }
                Err(e) => println!("❌ Could not start a new round: {e:#}\n"),
            },
            "/words" => {
                if let Some(round) = game.round() {
                    print_used_words(round);
                }
            }
            _ => {
                let result = game.submit_word(&input, checker)?;
                let root_word = game.round().map_or("", |round| round.root_word());
                match &result {
                    SubmitResult::Accepted { word, score } => {
                        println!(
                            "✓ {} {} | Score: {}\n",
                            word.to_uppercase().bright_green().bold(),
                            format!("+{}", word.chars().count()).green(),
                            score.to_string().bright_cyan().bold()
                        );
                    }
                    SubmitResult::Rejected { reason, word } => {
                        println!("❌ {}", reason.title().bright_red().bold());
                        println!("   {}\n", reason.message(word, root_word));
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn read_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
