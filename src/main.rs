//! Word Scramble - CLI
//!
//! Spell words from the letters of a random root word, in a TUI or a plain terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{check_word, reveal_words, run_simple, run_survey},
    config::{GameConfig, WordSource},
    dictionary::{Dictionary, Locale},
    output::{print_check_result, print_reveal_result, print_survey_statistics},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-separated file
    #[arg(short, long, global = true, default_value = "embedded")]
    roots: WordSource,

    /// Dictionary: 'embedded' (default, English) or path to a newline-separated file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: WordSource,

    /// Language the spell checker is asked about
    #[arg(short, long, global = true, default_value = "en")]
    locale: Locale,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check one word against a root word
    Check {
        /// The root word to spell from
        root: String,

        /// The candidate word
        word: String,
    },

    /// List every word that can be spelled from a root word
    Reveal {
        /// The root word to spell from
        root: String,
    },

    /// Rank every root word by how many words it offers
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins when set. Otherwise the TUI logs nothing, so output cannot tear the
/// alternate screen, and other modes log warnings (or debug with `--verbose`).
fn init_logging(verbose: bool, tui: bool) {
    let default_directive = match (tui, verbose) {
        (true, _) => "off",
        (false, true) => "word_scramble=debug",
        (false, false) => "warn",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let config = GameConfig::new(cli.roots, cli.dictionary, cli.locale);
    tracing::debug!(?config, "Configuration loaded");

    let dictionary = config
        .load_dictionary()
        .context("Failed to load dictionary")?;

    match command {
        Commands::Play => run_play_command(&config, &dictionary),
        Commands::Simple => {
            let roots = config.root_source();
            run_simple(&*roots, &dictionary, &config.locale)
        }
        Commands::Check { root, word } => {
            let result = check_word(&root, &word, &dictionary, &config.locale)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Reveal { root } => {
            let result = reveal_words(&root, &dictionary, &config.locale);
            print_reveal_result(&result);
            Ok(())
        }
        Commands::Survey { limit } => run_survey_command(&config, &dictionary, limit),
    }
}

fn run_play_command(config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    use word_scramble::engine::WordGame;
    use word_scramble::interactive::{App, run_tui};

    let roots = config.root_source();
    let game = WordGame::new().with_locale(config.locale.clone());
    let app = App::new(game, dictionary, &*roots).context("Failed to start a round")?;
    run_tui(app)
}

fn run_survey_command(
    config: &GameConfig,
    dictionary: &Dictionary,
    limit: Option<usize>,
) -> Result<()> {
    let roots = config.load_roots().context("Failed to load root words")?;

    println!("\n{}", "═".repeat(60));
    println!(" Word Scramble Root Survey ");
    println!("{}", "═".repeat(60));
    println!(
        "\nSurveying {} root words",
        limit.map_or(roots.len(), |n| n.min(roots.len()))
    );
    println!("Dictionary: {} ({} words)", config.dictionary, dictionary.len());
    println!();

    let stats = run_survey(&roots, dictionary, &config.locale, limit);
    print_survey_statistics(&stats);
    Ok(())
}
