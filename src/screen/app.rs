//! Screen state, event handling and the terminal loop

use super::state::{FetchTicket, SearchState, StalePolicy};
use super::ui;
use crate::domain::{Catalog, GameRecord};
use crate::error::{FetchError, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::ListState, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

const PAGE: u16 = 10;

/// Completion event for one fetch, delivered back to the UI loop.
pub struct Settled {
    pub ticket: FetchTicket,
    pub outcome: std::result::Result<Vec<GameRecord>, FetchError>,
}

pub struct App<C> {
    catalog: Arc<C>,
    pub state: SearchState,
    pub list_state: ListState,
    settled_tx: UnboundedSender<Settled>,
    settled_rx: UnboundedReceiver<Settled>,
    pub should_quit: bool,
}

impl<C: Catalog + 'static> App<C> {
    pub fn new(catalog: Arc<C>, policy: StalePolicy) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            state: SearchState::new(policy),
            list_state: ListState::default(),
            settled_tx,
            settled_rx,
            should_quit: false,
        }
    }

    /// Initial load of the unfiltered catalog.
    pub fn mount(&mut self) {
        self.issue_fetch();
    }

    /// Spawns a fetch for the current query. Nothing is cancelled; every
    /// fetch reports back through the channel.
    fn issue_fetch(&mut self) {
        let ticket = self.state.begin_fetch();
        debug!("Issuing fetch #{} for '{}'", ticket.seq, ticket.query);

        let catalog = Arc::clone(&self.catalog);
        let tx = self.settled_tx.clone();
        tokio::spawn(async move {
            let outcome = catalog.fetch_games(&ticket.query).await;
            let _ = tx.send(Settled { ticket, outcome });
        });
    }

    /// Drains completed fetches (non-blocking).
    pub fn poll_fetches(&mut self) {
        while let Ok(settled) = self.settled_rx.try_recv() {
            self.apply(settled);
        }
    }

    fn apply(&mut self, settled: Settled) {
        let selected_key = self
            .list_state
            .selected()
            .and_then(|i| self.state.results.get(i))
            .map(GameRecord::key);

        if self.state.settle(settled.ticket.seq, settled.outcome) {
            // Keep the cursor on the same game if it survived the refresh.
            let selected = selected_key
                .and_then(|key| self.state.results.iter().position(|g| g.key() == key))
                .or_else(|| (!self.state.results.is_empty()).then_some(0));
            self.list_state = ListState::default();
            self.list_state.select(selected);
        }
        debug!(
            "Fetch #{} for '{}' applied, screen is {:?}",
            settled.ticket.seq,
            settled.ticket.query,
            self.state.phase()
        );
    }

    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            (KeyCode::Up, _) => self.list_state.select_previous(),
            (KeyCode::Down, _) => self.list_state.select_next(),
            (KeyCode::PageUp, _) => self.list_state.scroll_up_by(PAGE),
            (KeyCode::PageDown, _) => self.list_state.scroll_down_by(PAGE),
            _ => {
                // Every edit fetches, no debounce.
                if self.state.query.handle_key(key.code, key.modifiers) {
                    self.issue_fetch();
                }
            }
        }
    }
}

/// Run the search screen until the user leaves it
pub async fn run<C: Catalog + 'static>(catalog: Arc<C>, policy: StalePolicy) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, policy);
    app.mount();

    let result = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<C: Catalog + 'static>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<C>,
) -> Result<()> {
    const FRAME_TIME: Duration = Duration::from_millis(16);

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            app.handle_event(event::read()?);
            if app.should_quit {
                return Ok(());
            }
        }

        app.poll_fetches();

        terminal.draw(|f| ui::render(f, &app.state, &mut app.list_state))?;

        // Yield to the runtime so in-flight fetches make progress.
        let remaining = FRAME_TIME.saturating_sub(frame_start.elapsed());
        tokio::time::sleep(remaining.max(Duration::from_millis(1))).await;
    }
}
