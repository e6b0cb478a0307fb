//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::{Feedback, Game, MAX_NUMBER, MIN_NUMBER, parse_guess};
use colored::Colorize;
use log::info;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(game: &mut Game, reveal: bool) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(game, stdin.lock(), stdout.lock(), reveal).map_err(|e| e.to_string())
}

/// Drive rounds of `game` from `input` until the player quits or input ends
///
/// # Errors
///
/// Propagates any I/O error from `input` or `out`.
pub fn play_session<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut out: W,
    reveal: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        out,
        "║               Guess the Number - Interactive Mode            ║"
    )?;
    writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        out,
        "I'm thinking of a number between {MIN_NUMBER} and {MAX_NUMBER}. You have {} attempts.",
        game.attempts_left()
    )?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game\n")?;

    if reveal {
        writeln!(
            out,
            "{}",
            format!("(secret: {})", game.secret()).bright_black()
        )?;
    }

    loop {
        if game.is_over() {
            print_round_end(&mut out, game)?;

            let Some(answer) = read_line(&mut input, &mut out, "Play again? (yes/no)")? else {
                return Ok(());
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                new_round(&mut out, game, reveal)?;
                continue;
            }
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let prompt = format!(
            "Guess #{} ({} left)",
            game.attempts_used() + 1,
            game.attempts_left()
        );
        let Some(line) = read_line(&mut input, &mut out, &prompt)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => new_round(&mut out, game, reveal)?,
            _ => {
                game.stage_guess(parse_guess(&line));
                let feedback = game.submit_guess();
                if !feedback.is_terminal() {
                    writeln!(out, "{}\n", styled(feedback))?;
                }
            }
        }
    }
}

fn new_round<W: Write>(out: &mut W, game: &mut Game, reveal: bool) -> io::Result<()> {
    game.reset();
    info!("new round started");
    writeln!(out, "\n🔄 New game started!\n")?;
    if reveal {
        writeln!(
            out,
            "{}",
            format!("(secret: {})", game.secret()).bright_black()
        )?;
    }
    Ok(())
}

fn print_round_end<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(out, "    {}", styled(game.feedback()))?;
    if game.is_win() {
        let used = game.attempts_used();
        writeln!(
            out,
            "    Found in {} {}",
            used.to_string().bright_cyan().bold(),
            if used == 1 { "guess" } else { "guesses" }
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(70).bright_cyan())
}

fn styled(feedback: Feedback) -> colored::ColoredString {
    let text = feedback.to_string();
    match feedback {
        Feedback::Won => text.bright_green().bold(),
        Feedback::Lost { .. } => text.red().bold(),
        Feedback::OutOfRange => text.yellow(),
        Feedback::TooHigh | Feedback::TooLow | Feedback::Empty => text.normal(),
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(game: &mut Game, script: &str) -> String {
        let mut out = Vec::new();
        play_session(game, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_then_quit() {
        let mut game = Game::with_secret(50).unwrap();
        let output = run(&mut game, "10\n90\n50\nno\n");

        assert!(output.contains("Too low! Try again."));
        assert!(output.contains("Too high! Try again."));
        assert!(output.contains("Congratulations!"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(game.attempts_left(), 7);
        assert!(game.is_win());
    }

    #[test]
    fn invalid_entries_do_not_cost_attempts() {
        let mut game = Game::with_secret(50).unwrap();
        let output = run(&mut game, "150\nabc\n\nquit\n");

        assert_eq!(
            output.matches("Enter a number between 1 and 100.").count(),
            3
        );
        assert_eq!(game.attempts_left(), 10);
    }

    #[test]
    fn ten_misses_reveal_secret() {
        let mut game = Game::with_secret(7).unwrap();
        let script = "1\n".repeat(10) + "no\n";
        let output = run(&mut game, &script);

        assert!(output.contains("The correct number was 7"));
        assert!(game.is_over());
        assert!(!game.is_win());
    }

    #[test]
    fn play_again_resets() {
        let mut game = Game::with_secret(30).unwrap();
        let output = run(&mut game, "30\nyes\nquit\n");

        assert!(output.contains("New game started"));
        assert!(!game.is_over());
        assert_eq!(game.attempts_left(), 10);
    }

    #[test]
    fn new_command_resets_mid_round() {
        let mut game = Game::with_secret(30).unwrap();
        run(&mut game, "10\n20\nnew\nquit\n");

        assert_eq!(game.attempts_left(), 10);
        assert_eq!(game.last_guess(), None);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let mut game = Game::with_secret(30).unwrap();
        run(&mut game, "10\n");
        assert_eq!(game.attempts_left(), 9);
    }

    #[test]
    fn reveal_prints_secret() {
        let mut game = Game::with_secret(42).unwrap();
        let mut out = Vec::new();
        play_session(&mut game, "quit\n".as_bytes(), &mut out, true).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("secret: 42"));
    }
}
