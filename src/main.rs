//! gh-lookup binary entry point.
//!
//! Parses the command line, sets up file logging and the fetch worker,
//! initializes the terminal in raw mode, runs the TUI event loop,
//! and restores the terminal state on exit.
//!

use anyhow::Context;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use gh_lookup::Result;
use gh_lookup::app::{self, AppState, Keymap, Theme};
use gh_lookup::config::{Cli, init_logging};
use gh_lookup::github::GithubClient;
use gh_lookup::github::worker::FetchWorker;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file();
    if let Err(e) = init_logging(&log_file) {
        eprintln!("logging disabled: {e:#}");
    }

    let config_dir = cli.config_dir();
    let theme = Theme::load_or_init(&config_dir.join("theme.conf"));
    let keymap = Keymap::load_or_init(&config_dir.join("keybinds.conf"));

    let client = GithubClient::new(cli.client_config()?).context("build http client")?;
    let (mut worker, events) = FetchWorker::new(client).context("start fetch worker")?;

    let mut state = AppState::new(theme, keymap);
    if let Some(username) = cli.username.as_deref() {
        state.search_query = username.trim().to_string();
        let effects = state.submit_lookup(username);
        app::update::apply_effects(&mut state, &mut worker, effects);
    }

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, &mut state, &mut worker, &events);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "application error");
        eprintln!("application error: {err:#}");
    }
    Ok(())
}
