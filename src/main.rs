// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Speckle Stream Dashboard.
//!
//! A terminal dashboard over a Speckle stream: pick a branch and commit,
//! inspect the glulams and 3D-print data it carries, edit glulam notes and
//! push them back as a new commit, and browse stream statistics.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Task Worker** owns the session's service client and runs network
//!   requests one at a time.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.

mod browser;
mod commander;
mod components;
mod events;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flexi_logger::LoggerHandle;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use speckledash::{
    config::{self, AppConfig},
    logging,
    shaping::{StreamGraphs, StreamSummary},
    speckle::{Stream, StreamWrapper},
};

use crate::{
    browser::StreamBrowser,
    commander::Commander,
    components::{CommitView, ConnectForm, GlulamsView, PrintView},
    events::{AppEvent, process_events},
    tasks::AppTask,
    theme::Theme,
};

const TICK_RATE: Duration = Duration::from_millis(250);

pub(crate) const RECEIVING_COMMIT: &str = "Receiving commit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Inputs,
    Commit,
    Glulams,
    Print,
    Stats,
    Graphs,
}

impl MainView {
    pub(crate) const ALL: [MainView; 6] = [
        MainView::Inputs,
        MainView::Commit,
        MainView::Glulams,
        MainView::Print,
        MainView::Stats,
        MainView::Graphs,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            MainView::Inputs => "Inputs",
            MainView::Commit => "Commit",
            MainView::Glulams => "Glulams",
            MainView::Print => "3D Print",
            MainView::Stats => "Stream Stats",
            MainView::Graphs => "Graphs",
        }
    }
}

/// The stream currently on screen.
pub(crate) struct Session {
    pub wrapper: StreamWrapper,
    pub stream: Stream,
    pub summary: StreamSummary,
    pub graphs: StreamGraphs,
}

/// Outcome of the last user action, shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatusLine {
    Info(String),
    Error(String),
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub commander: Commander,
    pub connect_form: ConnectForm,
    pub stream_browser: StreamBrowser,

    pub commit_view: CommitView,
    pub glulams_view: GlulamsView,
    pub print_view: PrintView,

    pub session: Option<Session>,
    /// Object id of the commit being received, if any.
    pub pending_object: Option<String>,
    /// Object id of the commit whose glulams and print data are on screen.
    pub displayed_object: Option<String>,

    pub busy: Option<String>,
    pub status: Option<StatusLine>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let connect_form = ConnectForm::new(&config.stream_url, config.token.as_deref());

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Inputs,
            event_tx,
            event_rx,
            task_tx,
            commander: Commander::new(),
            connect_form,
            stream_browser: StreamBrowser::new(),
            commit_view: CommitView::default(),
            glulams_view: GlulamsView::new(),
            print_view: PrintView::new(),
            session: None,
            pending_object: None,
            displayed_object: None,
            busy: None,
            status: None,
        }
    }

    /// Whether a view has anything to show. Optional sections stay hidden
    /// until the selected commit carries their data.
    pub(crate) fn is_available(&self, view: MainView) -> bool {
        match view {
            MainView::Inputs => true,
            MainView::Commit | MainView::Stats | MainView::Graphs => self.session.is_some(),
            MainView::Glulams => !self.glulams_view.is_empty(),
            MainView::Print => self.print_view.has_data(),
        }
    }

    /// Clears the busy indicator after a request finished, unless the
    /// selected commit is still on its way.
    pub(crate) fn settle_busy(&mut self) {
        self.busy = self
            .pending_object
            .as_ref()
            .map(|_| RECEIVING_COMMIT.to_string());
    }

    pub(crate) fn available_views(&self) -> Vec<MainView> {
        MainView::ALL
            .into_iter()
            .filter(|view| self.is_available(*view))
            .collect()
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let _logger = start_logging(&config)?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        log::error!("event=app_exit module=main status=error error={:#}", e);
    }

    res.context("Application error occurred")
}

fn start_logging(config: &AppConfig) -> Result<LoggerHandle> {
    let log_dir = config::log_dir().context("Failed to resolve log directory")?;
    logging::init_logging(&config.log_level, &log_dir).context("Failed to start logging")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s against the service.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    // Connect straight away when a stream is configured
    if !app.connect_form.url().trim().is_empty() {
        app.event_tx.send(AppEvent::Connect)?;
    }

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
