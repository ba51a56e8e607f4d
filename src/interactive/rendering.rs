//! TUI rendering with ratatui
//!
//! Layout for the flag game screens: loading, error, playing, and the
//! all-complete celebration.

use super::app::{App, Phase};
use crate::game::Outcome;
use crate::output::formatters::create_progress_bar;
use crate::session::{Clock, KeyValueStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &app.phase {
        Phase::Loading => render_centered_message(
            f,
            chunks[1],
            "Loading countries and flags...",
            Color::Cyan,
        ),
        Phase::Failed(message) => render_error(f, message, chunks[1]),
        Phase::Playing => render_game(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);

    if app.celebrating {
        if let Some(total) = app.game.all_complete() {
            render_celebration(f, total);
        }
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌍 THE FLAG GAME - Daily Challenge")
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

fn render_centered_message(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_error(f: &mut Frame, message: &str, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press 'r' to retry or 'q' to quit"),
    ];
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Could not load countries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

fn render_game<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let suggestion_height = if app.show_suggestions {
        app.suggestions.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                    // Flag
            Constraint::Length(3),                 // Input
            Constraint::Length(suggestion_height), // Suggestions
            Constraint::Length(4),                 // Last result
        ])
        .split(area);

    render_flag(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    if app.show_suggestions {
        render_suggestions(f, app, chunks[2]);
    }
    render_notification(f, app, chunks[3]);
}

fn render_flag<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let mut content = Vec::new();

    if let Some(round) = app.game.round() {
        let target = round.target();
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            target.code.flag_emoji(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        content.push(Line::from(""));
        content.push(Line::from("What country is this?"));
        if !target.flags.png.is_empty() {
            content.push(Line::from(Span::styled(
                target.flags.png.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    } else {
        content.push(Line::from("No flags left to guess today."));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        format!("{} flags remaining today", app.remaining()),
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Flag ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_input<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let hint_note = match app.game.round() {
        Some(round) if round.hint_used() => " (hint used: no streak, no daily credit)",
        _ => "",
    };
    let title = format!(" Your guess{hint_note} ");

    let input = Paragraph::new(format!("{}▏", app.input))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_suggestions<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if app.selected_suggestion == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(name.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}

fn render_notification<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let Some(notification) = &app.notification else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let resolution = &notification.resolution;
    let (headline, detail, color) = match resolution.outcome {
        Outcome::Correct => (
            "🎉 Correct!",
            format!("That is {}!", resolution.answer),
            Color::Green,
        ),
        Outcome::CorrectWithHint => (
            "🎉 Correct! (with hint)",
            format!("That is {}!", resolution.answer),
            Color::LightGreen,
        ),
        Outcome::Incorrect => (
            "😢 Incorrect.",
            format!("That was {}.", resolution.answer),
            Color::Red,
        ),
    };

    let content = vec![
        Line::from(vec![
            Span::styled(headline, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::raw(detail),
        ]),
        Line::from(format!("Streak: {}", resolution.streak)),
    ];

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(color)));
    f.render_widget(paragraph, area);
}

fn render_status<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    let total = app.catalog.len();
    let done = app.game.completed().len();
    let progress = if total > 0 {
        format!(
            "{} {done}/{total}",
            create_progress_bar(done as f64, total as f64, 10)
        )
    } else {
        "-".to_string()
    };
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Center),
        chunks[0],
    );

    let streak = app.game.streak();
    let streak_text = format!("Streak: {} | Best: {}", streak.current(), streak.best());
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.phase {
        Phase::Loading => "q: Quit",
        Phase::Failed(_) => "r: Retry | q: Quit",
        Phase::Playing if app.celebrating => "Enter: Close | q: Quit",
        Phase::Playing => "Enter: Submit | ↑↓: Browse | Tab: Pick | ?: Hint | Ctrl-C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_celebration(f: &mut Frame, total: usize) {
    let area = centered_rect(70, 60, f.area());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🏆 LEGENDARY ACHIEVEMENT UNLOCKED! 🏆",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("✨ ULTIMATE FLAG MASTER ✨"),
        Line::from(""),
        Line::from(format!("You have conquered all {total} flags today!")),
        Line::from("100% completion"),
        Line::from(""),
        Line::from(Span::styled(
            "Come back tomorrow for a fresh challenge!",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
