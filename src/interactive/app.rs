//! TUI application state and logic

use crate::commands::reveal_words;
use crate::dictionary::Dictionary;
use crate::engine::{RoundState, SubmitResult, WordGame};
use crate::wordlists::RootWordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: WordGame,
    pub dictionary: &'a Dictionary,
    pub roots: &'a dyn RootWordSource,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub max_score: usize,
    pub should_quit: bool,
}

/// A rejection waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if the root word source cannot supply a list.
    pub fn new(
        game: WordGame,
        dictionary: &'a Dictionary,
        roots: &'a dyn RootWordSource,
    ) -> Result<Self> {
        let mut app = Self {
            game,
            dictionary,
            roots,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            max_score: 0,
            should_quit: false,
        };

        app.game.start_round_from(roots)?;
        app.round_started();
        Ok(app)
    }

    /// The active round
    ///
    /// # Panics
    ///
    /// Never: `new` only returns once a round is active and rounds are never ended.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        self.game
            .round()
            .expect("app always holds an active round")
    }

    /// Submit the input buffer as a word
    pub fn submit(&mut self) {
        let result = match self.game.submit_word(&self.input_buffer, self.dictionary) {
            Ok(result) => result,
            Err(e) => {
                self.add_message(&format!("{e}"), MessageStyle::Error);
                return;
            }
        };

        match result {
            SubmitResult::Accepted { word, score } => {
                self.input_buffer.clear();
                self.add_message(
                    &format!(
                        "+{} for {} (score {score})",
                        word.chars().count(),
                        word.to_uppercase()
                    ),
                    MessageStyle::Success,
                );
                if score == self.max_score {
                    self.add_message(
                        "🎉 You found every word! Ctrl-R for a new root word.",
                        MessageStyle::Success,
                    );
                }
            }
            SubmitResult::Rejected { reason, word } => {
                // Empty input is dismissed silently
                if word.is_empty() {
                    return;
                }
                let message = reason.message(&word, self.round().root_word());
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message,
                });
            }
        }
    }

    /// Start a new round, keeping the current one if no root word is available
    pub fn restart(&mut self) {
        match self.game.start_round_from(self.roots) {
            Ok(_) => {
                self.round_started();
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(e) => {
                self.add_message(&format!("Restart failed: {e:#}"), MessageStyle::Error);
            }
        }
    }

    /// Apply one key press
    ///
    /// While an alert is shown only Enter, Esc or Space (dismiss) and Ctrl-C (quit) act.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        if key.code == KeyCode::Char('c') && control {
            self.should_quit = true;
        } else if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
        } else {
            match key.code {
                KeyCode::Char('r') if control => self.restart(),
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if !control => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn round_started(&mut self) {
        let root_word = self.round().root_word().to_string();
        self.max_score = reveal_words(&root_word, self.dictionary, self.game.locale()).max_score;
        self.input_buffer.clear();
        self.alert = None;
        self.add_message(
            &format!("Spell words from {}!", root_word.to_uppercase()),
            MessageStyle::Info,
        );
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
