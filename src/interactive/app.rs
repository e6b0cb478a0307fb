//! TUI application state and logic

use crate::core::{Feedback, Game, parse_guess};
use crate::solver::Bounds;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest entry accepted in the input box
const MAX_INPUT_LEN: usize = 6;

/// Application state
pub struct App {
    pub game: Game,
    pub bounds: Bounds,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub reveal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: i64,
    pub feedback: Feedback,
    pub attempts_left: u32,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game, reveal: bool) -> Self {
        Self {
            game,
            bounds: Bounds::FULL,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'm thinking of a number between 1 and 100.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a number and press Enter. You have 10 attempts.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Guessing,
            reveal,
        }
    }

    /// Forward the input buffer to the game as the next guess
    pub fn submit_input(&mut self) {
        self.game.stage_guess(parse_guess(&self.input_buffer));
        let feedback = self.game.submit_guess();
        self.input_buffer.clear();

        if let Some(guess) = self.game.last_guess()
            && feedback != Feedback::OutOfRange
        {
            self.history.push(HistoryEntry {
                guess,
                feedback,
                attempts_left: self.game.attempts_left(),
            });
            self.bounds.narrow(guess, feedback);
        }

        let style = match feedback {
            Feedback::Won => MessageStyle::Success,
            Feedback::OutOfRange | Feedback::Lost { .. } => MessageStyle::Error,
            Feedback::TooHigh | Feedback::TooLow | Feedback::Empty => MessageStyle::Info,
        };
        self.add_message(&feedback.to_string(), style);

        if self.game.is_over() {
            self.input_mode = InputMode::RoundOver;
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.bounds = Bounds::FULL;
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            "New game started! Pick a number between 1 and 100.",
            MessageStyle::Info,
        );
        info!("new round started from TUI");
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

    /// Digits, or a leading minus sign, while there is room in the buffer
    fn accepts_char(&self, c: char) -> bool {
        let fits = self.input_buffer.len() < MAX_INPUT_LEN;
        fits && (c.is_ascii_digit() || (c == '-' && self.input_buffer.is_empty()))
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') => {
                self.new_game();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::RoundOver => {
                if key.code == KeyCode::Enter {
                    self.new_game();
                }
            }
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) if self.accepts_char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
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
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
