//! Display functions for command results

use super::formatters::{letter_badge, score_bar};
use crate::commands::{CheckResult, RevealResult, SurveyStatistics};
use crate::engine::{RoundState, SubmitResult};
use colored::Colorize;

/// Print the root word and score of a round
pub fn print_round(round: &RoundState) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        round.root_word().to_uppercase().bright_yellow().bold()
    );
    println!("Your current score is {}", round.score());
    println!("{}\n", "─".repeat(60).cyan());
}

/// Print accepted words, most recent first
pub fn print_used_words(round: &RoundState) {
    if round.guesses().is_empty() {
        println!("No words yet!\n");
        return;
    }

    for word in round.guesses() {
        println!("  {} {}", letter_badge(word).bright_cyan(), word);
    }
    println!("\nYour current score is {}\n", round.score());
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\nRoot word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );

    match &result.result {
        SubmitResult::Accepted { word, score } => {
            println!(
                "{}",
                format!("✅ '{word}' is accepted for {score} points")
                    .green()
                    .bold()
            );
        }
        SubmitResult::Rejected { .. } => {
            if let Some((title, message)) = result.alert() {
                println!("{}", format!("❌ {title}").red().bold());
                println!("   {message}");
            }
        }
    }
}

/// Print every word attainable from a root
pub fn print_reveal_result(result: &RevealResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS FROM".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo dictionary words can be spelled from this root.");
        return;
    }

    let mut current_len = 0;
    for word in &result.words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n{}", format!("{len} letters:").bright_cyan().bold());
        }
        println!("  {} {}", letter_badge(word).bright_black(), word);
    }

    println!(
        "\n📊 {} words, maximum score {}",
        result.words.len(),
        result.max_score.to_string().bright_yellow().bold()
    );
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Root words surveyed:  {}", stats.total_roots);
    println!(
        "   Average words:        {}",
        format!("{:.1}", stats.average_attainable).bright_yellow().bold()
    );
    println!(
        "   Average max score:    {}",
        format!("{:.1}", stats.average_max_score).bright_yellow().bold()
    );
    println!("   Time taken:           {:.2}s", stats.total_time.as_secs_f64());

    let Some(richest) = &stats.richest else {
        return;
    };

    println!("\n🏆 {}", "Richest root:".bright_cyan().bold());
    println!(
        "   {} - {} words, max score {}{}",
        richest.root_word.to_uppercase().green().bold(),
        richest.attainable,
        richest.max_score,
        richest
            .longest
            .as_ref()
            .map(|w| format!(", longest '{w}'"))
            .unwrap_or_default()
    );

    println!("\n📉 {}", "Poorest roots:".bright_cyan().bold());
    for summary in &stats.poorest {
        let bar = score_bar(summary.max_score, richest.max_score, 30);
        println!(
            "   {:<10} [{}] {:>4}",
            summary.root_word.to_uppercase(),
            bar.yellow(),
            summary.max_score
        );
    }
}
