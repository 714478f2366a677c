//! TUI application state and logic

use crate::core::{Difficulty, LetterSet, TargetWord};
use crate::game::{GuessEngine, GuessOutcome, Statistics, Status};
use crate::supplier::{SupplyError, WordSource, WordSupplier};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

/// How long the event loop waits for a key before checking on loads
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Application state
pub struct App<S: WordSource> {
    supplier: Arc<WordSupplier<S>>,
    runtime: Handle,
    loads_tx: UnboundedSender<LoadEvent>,
    loads_rx: UnboundedReceiver<LoadEvent>,
    ticket: u64,
    pub screen: Screen,
    pub difficulty: Difficulty,
    pub difficulty_cursor: usize,
    pub categories: Vec<String>,
    pub category_cursor: usize,
    pub category: Option<String>,
    pub key_cursor: char,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What the player is looking at
#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    LoadingCategories,
    ChooseCategory,
    LoadingWord,
    /// A round, in progress or finished
    Playing(GuessEngine),
    Failed(Failure),
}

/// Which fetch a failure belongs to, so retry knows what to redo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Categories,
    Word,
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub stage: FetchStage,
    pub message: String,
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

/// A finished fetch, tagged with the ticket it was issued under
struct LoadEvent {
    ticket: u64,
    loaded: Loaded,
}

enum Loaded {
    Categories(Result<Vec<String>, SupplyError>),
    Word(Result<TargetWord, SupplyError>),
}

impl<S: WordSource> App<S> {
    /// Create the app; fetches are spawned onto `runtime`
    #[must_use]
    pub fn new(supplier: WordSupplier<S>, runtime: Handle) -> Self {
        let (loads_tx, loads_rx) = mpsc::unbounded_channel();

        Self {
            supplier: Arc::new(supplier),
            runtime,
            loads_tx,
            loads_rx,
            ticket: 0,
            screen: Screen::Home,
            difficulty: Difficulty::default(),
            difficulty_cursor: Difficulty::default().index(),
            categories: Vec::new(),
            category_cursor: 0,
            category: None,
            key_cursor: 'A',
            messages: vec![Message {
                text: "Welcome! Pick a difficulty to start.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Current round, if one is on screen
    #[must_use]
    pub const fn engine(&self) -> Option<&GuessEngine> {
        match &self.screen {
            Screen::Playing(engine) => Some(engine),
            _ => None,
        }
    }

    /// Pick the difficulty and move on to the category list
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.difficulty_cursor = difficulty.index();
        info!(%difficulty, "difficulty selected");
        self.load_categories();
    }

    pub fn load_categories(&mut self) {
        self.screen = Screen::LoadingCategories;
        let supplier = Arc::clone(&self.supplier);
        self.spawn_load(async move { Loaded::Categories(supplier.list_categories().await) });
    }

    /// Pick the category at `index` and start a round in it
    pub fn select_category(&mut self, index: usize) {
        let Some(category) = self.categories.get(index).cloned() else {
            return;
        };
        self.category_cursor = index;
        info!(%category, "category selected");
        self.category = Some(category);
        self.start_round();
    }

    /// Begin a new round in the current category with a fresh word
    ///
    /// Also serves as "play again": whatever round was on screen is dropped.
    pub fn start_round(&mut self) {
        let Some(category) = self.category.clone() else {
            return;
        };
        self.screen = Screen::LoadingWord;
        self.key_cursor = 'A';
        let range = self.difficulty.range();
        let supplier = Arc::clone(&self.supplier);
        self.spawn_load(async move { Loaded::Word(supplier.pick_word(&category, range).await) });
    }

    /// Guess a letter in the current round
    ///
    /// Returns `None` when no round is on screen.
    pub fn guess(&mut self, letter: char) -> Option<GuessOutcome> {
        let Screen::Playing(engine) = &mut self.screen else {
            return None;
        };
        let outcome = engine.guess(letter);
        let status = engine.status();
        let wrong_guesses = engine.wrong_guesses();
        let available = engine.available();
        let word = engine.target().text().to_string();

        match outcome {
            GuessOutcome::Hit {
                letter,
                occurrences,
            } => {
                let text = if occurrences == 1 {
                    format!("{letter} is in the word.")
                } else {
                    format!("{letter} appears {occurrences} times.")
                };
                self.add_message(&text, MessageStyle::Success);
            }
            GuessOutcome::Miss { letter } => {
                self.add_message(&format!("No {letter}."), MessageStyle::Error);
            }
            GuessOutcome::Unavailable { .. } | GuessOutcome::Ignored => return Some(outcome),
        }

        if !available.contains(self.key_cursor) {
            self.key_cursor = next_available(available, self.key_cursor, true).unwrap_or('A');
        }

        if status.is_terminal() {
            self.stats.record(status, wrong_guesses);
            info!(?status, wrong_guesses, "round finished");
            match status {
                Status::Won => self.add_message("You win! Congratulations!", MessageStyle::Success),
                Status::Lost => self.add_message(
                    &format!("Game over. The word was {word}."),
                    MessageStyle::Error,
                ),
                Status::Active => {}
            }
            self.add_message(
                "Press 'n' to play again, 'c' for another category, Esc to exit.",
                MessageStyle::Info,
            );
        }

        Some(outcome)
    }

    /// Redo the fetch that failed
    pub fn retry(&mut self) {
        let stage = match &self.screen {
            Screen::Failed(failure) => failure.stage,
            _ => return,
        };
        match stage {
            FetchStage::Categories => self.load_categories(),
            FetchStage::Word => self.start_round(),
        }
    }

    /// Go to the category list, fetching it if it was never loaded
    pub fn choose_other_category(&mut self) {
        if self.categories.is_empty() {
            self.load_categories();
        } else {
            self.abandon_loads();
            self.screen = Screen::ChooseCategory;
        }
    }

    /// Leave the current screen for the one before it
    pub fn back(&mut self) {
        match self.screen {
            Screen::Home => {}
            Screen::LoadingWord | Screen::Playing(_) => self.choose_other_category(),
            Screen::LoadingCategories | Screen::ChooseCategory | Screen::Failed(_) => {
                self.go_home();
            }
        }
    }

    pub fn go_home(&mut self) {
        self.abandon_loads();
        self.screen = Screen::Home;
        self.category = None;
    }

    /// Apply every finished fetch; returns how many were applied
    ///
    /// Results issued under an older ticket are dropped.
    pub fn poll_loads(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.loads_rx.try_recv() {
            if event.ticket == self.ticket {
                self.apply(event.loaded);
                applied += 1;
            } else {
                debug!(
                    ticket = event.ticket,
                    current = self.ticket,
                    "dropping stale load"
                );
            }
        }
        applied
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

    /// Dispatch a key press for the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match &self.screen {
            Screen::Home => self.handle_home_key(key.code),
            Screen::LoadingCategories | Screen::LoadingWord => {
                if key.code == KeyCode::Esc {
                    self.back();
                }
            }
            Screen::ChooseCategory => self.handle_category_key(key.code),
            Screen::Playing(engine) if engine.status().is_terminal() => {
                self.handle_finished_key(key.code);
            }
            Screen::Playing(_) => self.handle_playing_key(key.code),
            Screen::Failed(_) => match key.code {
                KeyCode::Char('r' | 'R') | KeyCode::Enter => self.retry(),
                KeyCode::Char('c' | 'C') => self.choose_other_category(),
                KeyCode::Esc => self.back(),
                _ => {}
            },
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.difficulty_cursor = self.difficulty_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.difficulty_cursor = (self.difficulty_cursor + 1).min(Difficulty::ALL.len() - 1);
            }
            KeyCode::Enter => self.select_difficulty(Difficulty::ALL[self.difficulty_cursor]),
            KeyCode::Char(c) => {
                if let Ok(difficulty) = c.to_string().parse::<Difficulty>() {
                    self.select_difficulty(difficulty);
                }
            }
            _ => {}
        }
    }

    fn handle_category_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.back(),
            KeyCode::Up => self.category_cursor = self.category_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.category_cursor =
                    (self.category_cursor + 1).min(self.categories.len().saturating_sub(1));
            }
            KeyCode::Enter => self.select_category(self.category_cursor),
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        let available = self.engine().map_or(LetterSet::EMPTY, GuessEngine::available);
        match code {
            KeyCode::Esc => self.back(),
            KeyCode::Left => {
                if let Some(c) = next_available(available, self.key_cursor, false) {
                    self.key_cursor = c;
                }
            }
            KeyCode::Right => {
                if let Some(c) = next_available(available, self.key_cursor, true) {
                    self.key_cursor = c;
                }
            }
            KeyCode::Enter => {
                self.guess(self.key_cursor);
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if let Some(GuessOutcome::Unavailable { letter }) = self.guess(c) {
                    self.add_message(
                        &format!("{letter} was already guessed."),
                        MessageStyle::Info,
                    );
                }
            }
            _ => {}
        }
    }

    fn handle_finished_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => {
                self.add_message("New round!", MessageStyle::Info);
                self.start_round();
            }
            KeyCode::Char('c' | 'C') => self.choose_other_category(),
            KeyCode::Esc => self.go_home(),
            _ => {}
        }
    }

    fn apply(&mut self, loaded: Loaded) {
        match loaded {
            Loaded::Categories(Ok(categories)) if categories.is_empty() => {
                self.fail(FetchStage::Categories, "The word API has no categories.".to_string());
            }
            Loaded::Categories(Ok(categories)) => {
                self.category_cursor = self.category_cursor.min(categories.len() - 1);
                self.categories = categories;
                self.screen = Screen::ChooseCategory;
            }
            Loaded::Categories(Err(e)) => {
                self.fail(FetchStage::Categories, format!("Failed to load categories: {e}"));
            }
            Loaded::Word(Ok(word)) => {
                debug!(len = word.len(), "round started");
                self.screen = Screen::Playing(GuessEngine::new(word));
            }
            Loaded::Word(Err(e @ SupplyError::NoWordsAvailable { .. })) => {
                self.fail(FetchStage::Word, format!("No words found for this difficulty: {e}"));
            }
            Loaded::Word(Err(e)) => {
                self.fail(FetchStage::Word, format!("Failed to load words: {e}"));
            }
        }
    }

    fn fail(&mut self, stage: FetchStage, message: String) {
        self.add_message(&message, MessageStyle::Error);
        self.screen = Screen::Failed(Failure { stage, message });
    }

    /// Forget any fetch still in flight
    fn abandon_loads(&mut self) {
        self.ticket += 1;
    }

    fn spawn_load<F>(&mut self, load: F)
    where
        F: Future<Output = Loaded> + Send + 'static,
    {
        self.abandon_loads();
        let ticket = self.ticket;
        let tx = self.loads_tx.clone();
        self.runtime.spawn(async move {
            let loaded = load.await;
            // The receiver only goes away when the app does
            let _ = tx.send(LoadEvent { ticket, loaded });
        });
    }
}

/// The next letter after `from` that is still available, wrapping around
fn next_available(available: LetterSet, from: char, forward: bool) -> Option<char> {
    let start = LetterSet::index_of(from).unwrap_or(0);
    (1..=26).find_map(|step| {
        let index = if forward {
            (start + step) % 26
        } else {
            (start + 26 - step) % 26
        };
        let letter = char::from_u32(u32::from(b'A') + index)?;
        available.contains(letter).then_some(letter)
    })
}

/// Run the TUI until the player quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.poll_loads();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
