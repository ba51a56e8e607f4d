//! TUI application state and logic

use crate::catalog::{Catalog, CatalogError, CatalogSource};
use crate::game::{Effect, Event as GameEvent, GameState, Resolution, suggest};
use crate::session::{Clock, DailySessionStore, FileStore, KeyValueStore, SystemClock};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// How long a round result stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Event loop wake-up interval when no key is pressed
const TICK: Duration = Duration::from_millis(250);

/// Where the application is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Catalog fetch in flight; no guesses accepted
    Loading,
    /// Catalog fetch failed; waiting for a manual retry
    Failed(String),
    Playing,
}

/// Result of the previous round, overlaid on the next one
#[derive(Debug, Clone)]
pub struct Notification {
    pub resolution: Resolution,
    pub shown_at: Instant,
}

/// Application state
pub struct App<S = FileStore, C = SystemClock> {
    pub source: CatalogSource,
    pub phase: Phase,
    pub catalog: Catalog,
    pub sessions: DailySessionStore<S, C>,
    pub game: GameState,
    pub input: String,
    pub suggestions: Vec<String>,
    pub selected_suggestion: Option<usize>,
    pub show_suggestions: bool,
    pub notification: Option<Notification>,
    pub celebrating: bool,
    pub should_quit: bool,
    poll_interval: Duration,
    last_poll: Instant,
    loader: Option<Receiver<Result<Catalog, CatalogError>>>,
    rng: StdRng,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    /// Create the application and load today's progress
    ///
    /// The catalog is not fetched yet; call [`App::start_loading`].
    #[must_use]
    pub fn new(
        source: CatalogSource,
        mut sessions: DailySessionStore<S, C>,
        poll_interval: Duration,
    ) -> Self {
        let completed = sessions.startup();

        Self {
            source,
            phase: Phase::Loading,
            catalog: Catalog::default(),
            sessions,
            game: GameState::new(completed),
            input: String::new(),
            suggestions: Vec::new(),
            selected_suggestion: None,
            show_suggestions: false,
            notification: None,
            celebrating: false,
            should_quit: false,
            poll_interval,
            last_poll: Instant::now(),
            loader: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the random source with a seeded one
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Fetch the catalog on a background thread
    pub fn start_loading(&mut self) {
        let source = self.source.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone only if the app already quit
            let _ = tx.send(source.load());
        });

        self.phase = Phase::Loading;
        self.loader = Some(rx);
    }

    /// Pick up the catalog fetch result if it has arrived
    pub fn check_loader(&mut self) {
        let Some(rx) = &self.loader else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.loader = None;
                self.finish_loading(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.loader = None;
                self.finish_loading(Err(CatalogError::Http {
                    url: self.source.describe(),
                    message: "loader stopped before finishing".to_string(),
                }));
            }
        }
    }

    /// Install a freshly built catalog, or switch to the error screen
    pub fn finish_loading(&mut self, result: Result<Catalog, CatalogError>) {
        match result {
            Ok(catalog) => {
                let valid = self.sessions.reconcile(self.game.completed(), &catalog);
                self.catalog = catalog;
                self.dispatch(GameEvent::Reconciled(valid));
                self.phase = Phase::Playing;
                self.last_poll = Instant::now();
                self.dispatch(GameEvent::Start);
            }
            Err(e) => {
                tracing::warn!("catalog load failed: {e}");
                self.phase = Phase::Failed(e.to_string());
            }
        }
    }

    /// Re-run the same fetch after a failure
    pub fn retry(&mut self) {
        if matches!(self.phase, Phase::Failed(_)) {
            tracing::info!(source = %self.source.describe(), "retrying catalog load");
            self.start_loading();
        }
    }

    /// Apply a game event and carry out its effects
    fn dispatch(&mut self, event: GameEvent) {
        let was_complete = self.game.all_complete().is_some();
        let state = std::mem::take(&mut self.game);
        let transition = state.apply(event, &self.catalog, &mut self.rng);
        self.game = transition.state;

        for effect in transition.effects {
            match effect {
                Effect::PersistCompleted(completed) => self.sessions.save(&completed),
            }
        }

        if let Some(input) = transition.input {
            self.input = input;
            self.hide_suggestions();
        }

        if let Some(resolution) = transition.resolution {
            self.notification = Some(Notification {
                resolution,
                shown_at: Instant::now(),
            });
        }

        match self.game.all_complete() {
            Some(_) if !was_complete => self.celebrating = true,
            Some(_) => {}
            None => self.celebrating = false,
        }
    }

    /// Recompute suggestions after the input text changed
    pub fn on_input_changed(&mut self) {
        self.suggestions = suggest(&self.input, &self.catalog)
            .into_iter()
            .map(|country| country.name.clone())
            .collect();
        self.show_suggestions = !self.input.is_empty() && !self.suggestions.is_empty();
        self.selected_suggestion = None;
    }

    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
        self.selected_suggestion = None;
    }

    /// Submit whatever is in the input box
    pub fn submit(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.hide_suggestions();
        let guess = self.input.clone();
        self.dispatch(GameEvent::Submit(guess));
    }

    /// Submit a suggestion directly, as if it had been typed
    pub fn accept_suggestion(&mut self, index: usize) {
        if let Some(name) = self.suggestions.get(index).cloned() {
            self.input = name;
            self.submit();
        }
    }

    pub fn request_hint(&mut self) {
        if self.phase == Phase::Playing {
            self.dispatch(GameEvent::Hint);
        }
    }

    /// Move the suggestion highlight down, wrapping around
    pub fn select_next_suggestion(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        let next = match self.selected_suggestion {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.highlight(next);
    }

    /// Move the suggestion highlight up, wrapping around
    pub fn select_previous_suggestion(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        let prev = match self.selected_suggestion {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.highlight(prev);
    }

    fn highlight(&mut self, index: usize) {
        self.selected_suggestion = Some(index);
        self.input.clone_from(&self.suggestions[index]);
    }

    /// Timer work: notification expiry and the day-rollover poll
    pub fn tick(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= NOTIFICATION_TTL)
        {
            self.notification = None;
        }

        if self.phase == Phase::Playing
            && now.saturating_duration_since(self.last_poll) >= self.poll_interval
        {
            self.last_poll = now;
            if let Some(fresh) = self.sessions.poll(self.game.completed()) {
                let fresh = self.sessions.reconcile(&fresh, &self.catalog);
                self.dispatch(GameEvent::DayRolledOver(fresh));
            }
        }
    }

    /// Flags not yet completed today
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.game.remaining(&self.catalog)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.phase {
            Phase::Loading => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
            Phase::Failed(_) => match key.code {
                KeyCode::Char('r') => self.retry(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Phase::Playing if self.celebrating => match key.code {
                KeyCode::Enter | KeyCode::Esc => self.celebrating = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Phase::Playing => self.handle_playing_key(key),
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        match key.code {
            // Country names never contain '?', so it is free to mean "hint"
            KeyCode::Char('?') | KeyCode::F(1) => self.request_hint(),
            KeyCode::Char(c) => {
                self.input.push(c);
                self.on_input_changed();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.on_input_changed();
            }
            KeyCode::Down if self.show_suggestions => self.select_next_suggestion(),
            KeyCode::Up if self.show_suggestions => self.select_previous_suggestion(),
            KeyCode::Tab if self.show_suggestions => {
                self.accept_suggestion(self.selected_suggestion.unwrap_or(0));
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.hide_suggestions(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, C: Clock>(app: App<S, C>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore, C: Clock>(
    terminal: &mut Terminal<B>,
    mut app: App<S, C>,
) -> Result<()> {
    app.start_loading();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.check_loader();
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
