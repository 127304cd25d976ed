use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

use crate::app::{AppState, Effect, InputMode, KeyAction, ModalState};
use crate::github::worker::{FetchEvent, FetchWorker};
use crate::ui;

/// Drive the UI: draw, drain fetch completions, handle one key, repeat.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    worker: &mut FetchWorker,
    events: &Receiver<FetchEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let mut effects = Vec::new();
        for completion in events.try_iter() {
            effects.extend(app.apply_fetch_event(completion));
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    effects.extend(handle_key(app, key));
                }
            }
        }

        if !apply_effects(app, worker, effects) {
            debug!("quit requested");
            return Ok(());
        }
    }
}

/// Hand effects to the worker. Returns `false` once `Quit` is seen.
pub fn apply_effects(app: &mut AppState, worker: &mut FetchWorker, effects: Vec<Effect>) -> bool {
    for effect in effects {
        match effect {
            Effect::LookupProfile(ticket) => {
                worker.lookup_profile(ticket.generation, ticket.username);
            }
            Effect::LoadRepositories { view, login } => worker.load_repositories(view, login),
            Effect::CancelRepositories => worker.cancel_repositories(),
            Effect::OpenUrl(url) => {
                if let Err(e) = open::that_detached(&url) {
                    warn!(%url, error = %e, "failed to open browser");
                    app.notice = Some(format!("Could not open {url}: {e}"));
                }
            }
            Effect::Quit => return false,
        }
    }
    true
}

/// Route one key press according to the current input mode.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    app.notice = None;
    match app.input_mode {
        InputMode::Search => handle_search_key(app, key),
        InputMode::Modal => {
            handle_modal_key(app, key.code);
            Vec::new()
        }
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => {
            // Submit is disabled while a lookup is running
            if app.search.state().loading {
                app.notice = Some("A lookup is already in progress".to_string());
                return Vec::new();
            }
            let query = app.search_query.clone();
            let effects = app.submit_lookup(&query);
            if !effects.is_empty() {
                app.input_mode = InputMode::Normal;
            }
            return effects;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char('u') if ctrl => app.search_query.clear(),
        KeyCode::Char('c') if ctrl => return vec![Effect::Quit],
        KeyCode::Char(c) if !ctrl => app.search_query.push(c),
        _ => {}
    }
    Vec::new()
}

fn handle_modal_key(app: &mut AppState, code: KeyCode) {
    let Some(ModalState::Help { scroll }) = app.modal.as_mut() else {
        app.input_mode = InputMode::Normal;
        return;
    };
    match code {
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.modal = None;
            app.input_mode = InputMode::Normal;
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    let Some(action) = app.keymap.resolve(&key) else {
        return Vec::new();
    };
    match action {
        KeyAction::Quit => vec![Effect::Quit],
        KeyAction::StartSearch => {
            app.input_mode = InputMode::Search;
            Vec::new()
        }
        KeyAction::OpenHelp => {
            app.modal = Some(ModalState::Help { scroll: 0 });
            app.input_mode = InputMode::Modal;
            Vec::new()
        }
        KeyAction::Close => app.close_detail(),
        KeyAction::Select => match &app.detail {
            Some(view) => open_url(view.selected_repository().map(|r| r.html_url.clone())),
            None => match app.selected_featured().map(|u| u.login) {
                Some(login) => app.submit_lookup(login),
                None => Vec::new(),
            },
        },
        KeyAction::MoveUp | KeyAction::MoveDown | KeyAction::MoveLeft | KeyAction::MoveRight => {
            move_selection(app, action);
            Vec::new()
        }
        KeyAction::OpenProfile => open_url(app.search.profile().map(|p| p.html_url.clone())),
        KeyAction::OpenRepository => open_url(
            app.detail
                .as_ref()
                .and_then(|d| d.selected_repository())
                .map(|r| r.html_url.clone()),
        ),
        KeyAction::Ignore => Vec::new(),
    }
}

fn open_url(url: Option<String>) -> Vec<Effect> {
    url.map(Effect::OpenUrl).into_iter().collect()
}

fn move_selection(app: &mut AppState, action: KeyAction) {
    if let Some(view) = app.detail.as_mut() {
        match action {
            KeyAction::MoveUp => view.move_selection(false),
            KeyAction::MoveDown => view.move_selection(true),
            _ => {}
        }
        return;
    }

    let len = app.featured.len();
    if len == 0 {
        return;
    }
    let cols = app.grid_columns.max(1);
    let cur = app.selected_featured;
    app.selected_featured = match action {
        KeyAction::MoveLeft => cur.saturating_sub(1),
        KeyAction::MoveRight => (cur + 1).min(len - 1),
        KeyAction::MoveUp => cur.checked_sub(cols).unwrap_or(cur),
        KeyAction::MoveDown if cur + cols < len => cur + cols,
        _ => cur,
    };
}
