//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, MAX_ATTEMPTS};
use crate::output::formatters::feedback_glyph;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_round_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 GUESS THE NUMBER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Feedback
            Constraint::Min(3),    // History
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_feedback(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let left = app.game.attempts_left();
    let color = match left {
        0..=2 => Color::Red,
        3..=5 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(left) / f64::from(MAX_ATTEMPTS))
        .label(format!("{left}/{MAX_ATTEMPTS} left"));

    f.render_widget(gauge, area);
}

fn render_feedback(f: &mut Frame, app: &App, area: Rect) {
    let feedback = app.game.feedback();
    let style = match feedback {
        Feedback::Won => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Feedback::Lost { .. } => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Feedback::OutOfRange => Style::default().fg(Color::Yellow),
        Feedback::TooHigh | Feedback::TooLow | Feedback::Empty => Style::default(),
    };

    let content = if feedback == Feedback::Empty {
        Line::from(Span::styled(
            "Make your first guess!",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(feedback_glyph(feedback)),
            Span::raw(" "),
            Span::styled(feedback.to_string(), style),
        ])
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Feedback ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let content = format!(
                "{:2}: {:>3} {} ({} left)",
                i + 1,
                entry.guess,
                feedback_glyph(entry.feedback),
                entry.attempts_left
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    render_range(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_range(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Possible: "),
            Span::styled(
                app.bounds.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("{} values left", app.bounds.len())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Range ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver if app.game.is_win() => (
            " 🎉 YOU WIN! 🎉 | Enter or 'n' for new game, 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::RoundOver => (
            " Round over | Enter or 'n' for new game, 'q' to quit ",
            "",
            Color::Red,
        ),
        InputMode::Guessing => (
            " Your Guess (1-100) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round_text = if app.game.is_over() {
        "Round: Over"
    } else {
        "Round: Playing"
    };
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[0],
    );

    let secret_text = if app.reveal {
        format!("Secret: {}", app.game.secret())
    } else {
        "Secret: ??".to_string()
    };
    f.render_widget(
        Paragraph::new(secret_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_header_and_panels() {
        let app = App::new(Game::with_secret(40).unwrap(), false);
        let screen = render(&app);

        assert!(screen.contains("GUESS THE NUMBER"));
        assert!(screen.contains("Attempts"));
        assert!(screen.contains("10/10 left"));
        assert!(screen.contains("Make your first guess!"));
        assert!(screen.contains("1-100"));
        assert!(screen.contains("Secret: ??"));
    }

    #[test]
    fn renders_feedback_and_range() {
        let mut app = App::new(Game::with_secret(40).unwrap(), false);
        app.input_buffer = "60".to_string();
        app.submit_input();
        let screen = render(&app);

        assert!(screen.contains("Too high! Try again."));
        assert!(screen.contains("1-59"));
        assert!(screen.contains("9/10 left"));
    }

    #[test]
    fn reveal_shows_secret() {
        let app = App::new(Game::with_secret(42).unwrap(), true);
        assert!(render(&app).contains("Secret: 42"));
    }

    #[test]
    fn lost_round_shows_secret_in_feedback() {
        let mut app = App::new(Game::with_secret(99).unwrap(), false);
        for _ in 0..10 {
            app.input_buffer = "1".to_string();
            app.submit_input();
        }
        let screen = render(&app);

        assert!(screen.contains("The correct number was 99"));
        assert!(screen.contains("Round over"));
    }
}
