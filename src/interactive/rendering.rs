//! TUI rendering with ratatui
//!
//! Screens for difficulty and category choice, the round itself, and fetch failures.

use super::app::{App, FetchStage, MessageStyle, Screen};
use crate::core::Difficulty;
use crate::game::{GuessEngine, MAX_TRIES, Status};
use crate::output::formatters::{KEYBOARD_ROWS, distribution_bars, gallows, spaced};
use crate::supplier::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Action bar
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Screen content
            Constraint::Percentage(40), // Messages and stats
        ])
        .split(chunks[1]);

    match &app.screen {
        Screen::Home => render_home(f, app, main_chunks[0]),
        Screen::LoadingCategories => render_loading(f, "Loading categories…", main_chunks[0]),
        Screen::LoadingWord => render_loading(f, "Loading words…", main_chunks[0]),
        Screen::ChooseCategory => render_categories(f, app, main_chunks[0]),
        Screen::Playing(engine) => render_round(f, engine, app.key_cursor, main_chunks[0]),
        Screen::Failed(failure) => render_failure(f, &failure.message, main_chunks[0]),
    }

    render_info_panel(f, app, main_chunks[1]);
    render_actions(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_home<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .map(|difficulty| {
            ListItem::new(format!(
                "{:<8} {} letters",
                difficulty.label(),
                difficulty.range()
            ))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Choose Difficulty ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Difficulties
            Constraint::Min(0),    // Win distribution
        ])
        .split(area);

    let mut state = ListState::default().with_selected(Some(app.difficulty_cursor));
    f.render_stateful_widget(list, chunks[0], &mut state);

    if app.stats.rounds_won > 0 {
        let bars: Vec<Line> = distribution_bars(&app.stats.wrong_guess_distribution, 16)
            .into_iter()
            .map(Line::from)
            .collect();
        let distribution = Paragraph::new(bars)
            .style(Style::default().fg(Color::Green))
            .block(
                Block::default()
                    .title(" Wins by Wrong Guesses ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(distribution, chunks[1]);
    }
}

fn render_loading(f: &mut Frame, text: &str, area: Rect) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_categories<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let items: Vec<ListItem> = app
        .categories
        .iter()
        .map(|category| ListItem::new(category.as_str()))
        .collect();

    let title = format!(" Choose Category ({}) ", app.difficulty);
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.category_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_round(f: &mut Frame, engine: &GuessEngine, key_cursor: char, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Gallows and word
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(10)])
        .split(chunks[0]);

    let figure_color = match engine.status() {
        Status::Lost => Color::Red,
        Status::Won => Color::Green,
        Status::Active => Color::White,
    };
    let figure: Vec<Line> = gallows(engine.wrong_guesses())
        .iter()
        .map(|&line| Line::from(line))
        .collect();
    let figure = Paragraph::new(figure)
        .style(Style::default().fg(figure_color))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(figure, top[0]);

    render_word(f, engine, top[1]);
    render_keyboard(f, engine, key_cursor, chunks[1]);
}

fn render_word(f: &mut Frame, engine: &GuessEngine, area: Rect) {
    let word = match engine.status() {
        // Reveal the answer once the round is lost
        Status::Lost => spaced(engine.target().text()),
        _ => spaced(&engine.masked_word()),
    };
    let word_style = match engine.status() {
        Status::Won => Style::default().fg(Color::Green),
        Status::Lost => Style::default().fg(Color::Red),
        Status::Active => Style::default().fg(Color::Yellow),
    };

    let wrong = engine.wrong();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(word, word_style.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(format!("{} letters", engine.target().len())),
        Line::from(vec![
            Span::raw("Wrong: "),
            Span::styled(
                if wrong.is_empty() {
                    "-".to_string()
                } else {
                    wrong.to_string()
                },
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, engine: &GuessEngine, key_cursor: char, area: Rect) {
    let active = engine.status() == Status::Active;
    let available = engine.available();
    let correct = engine.correct();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = if active && c == key_cursor {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else if available.contains(c) {
                        Style::default().fg(Color::White)
                    } else if correct.contains(c) {
                        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    Span::styled(format!(" {c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_failure(f: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Something went wrong ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tries gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_tries(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_tries<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let tries = app.engine().map_or(MAX_TRIES, GuessEngine::tries_remaining);
    let color = match tries {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(tries) * 100 / u16::from(MAX_TRIES))
        .label(format!("{tries}/{MAX_TRIES} left"));

    f.render_widget(gauge, area);
}

fn render_messages<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_actions<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, color) = match &app.screen {
        Screen::Home => (" ↑/↓ Enter or e/m/h: choose difficulty | q: quit ", Color::Cyan),
        Screen::LoadingCategories | Screen::LoadingWord => (" Esc: cancel ", Color::Cyan),
        Screen::ChooseCategory => (" ↑/↓ Enter: choose category | Esc: back ", Color::Cyan),
        Screen::Playing(engine) => match engine.status() {
            Status::Active => (
                " A-Z: guess | ←/→ Enter: guess highlighted | Esc: leave round ",
                Color::Yellow,
            ),
            Status::Won => (
                " 🎉 YOU WIN! | n: play again | c: other category | Esc: exit ",
                Color::Green,
            ),
            Status::Lost => (
                " 💀 GAME OVER | n: try again | c: other category | Esc: exit ",
                Color::Red,
            ),
        },
        Screen::Failed(failure) => match failure.stage {
            FetchStage::Categories => (" r: retry | Esc: home ", Color::Red),
            FetchStage::Word => (
                " r: retry | c: choose different category | Esc: home ",
                Color::Red,
            ),
        },
    };

    let bar = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
    );

    f.render_widget(bar, area);
}

fn render_status<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let difficulty = Paragraph::new(format!("Difficulty: {}", app.difficulty))
        .alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[0]);

    let category = Paragraph::new(format!(
        "Category: {}",
        app.category.as_deref().unwrap_or("-")
    ))
    .alignment(Alignment::Center);
    f.render_widget(category, chunks[1]);

    let stats_text = format!(
        "Rounds: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.rounds_played(),
        app.stats.rounds_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(stats, chunks[2]);
}
