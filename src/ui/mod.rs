//! Rendering. Pure functions of [`AppState`]; the only thing written back is
//! the featured grid's column count, which key navigation needs.
//!
pub mod components;
pub mod featured;
pub mod profile;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{AppState, ModalState};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    components::render_header(f, root[0], app);

    if app.search.profile().is_some() {
        profile::render_profile_overlay(f, root[1], app);
    } else {
        featured::render_home(f, root[1], app);
    }

    components::render_status_bar(f, root[2], app);

    if let Some(ModalState::Help { scroll }) = app.modal {
        components::render_help_modal(f, area, app, scroll);
    }
}
