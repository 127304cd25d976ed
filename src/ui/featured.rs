use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::AppState;

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;

/// Home screen: error banner (if the last lookup failed) above the featured grid.
pub fn render_home(f: &mut Frame, area: Rect, app: &mut AppState) {
    let grid_area = match app.search.state().error.clone() {
        Some(message) => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(3)])
                .split(area);
            render_error_banner(f, parts[0], app, &message);
            parts[1]
        }
        None => area,
    };
    render_featured_grid(f, grid_area, app);
}

fn render_error_banner(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let p = Paragraph::new(message.to_string())
        .style(Style::default().fg(app.theme.error_fg).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error_fg)),
        );
    f.render_widget(p, area);
}

/// Cards wrap into as many columns as fit; the column count is stored on the
/// state so arrow keys move through the same layout the user sees.
pub fn render_featured_grid(f: &mut Frame, area: Rect, app: &mut AppState) {
    let outer = Block::default()
        .title("Featured Developers")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let count = app.featured.len();
    if count == 0 || inner.width == 0 || inner.height == 0 {
        return;
    }

    let columns = ((inner.width / CARD_WIDTH) as usize).clamp(1, count);
    app.grid_columns = columns;
    let rows = count.div_ceil(columns);

    let mut row_constraints = vec![Constraint::Length(CARD_HEIGHT); rows];
    row_constraints.push(Constraint::Min(0));
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (row, row_area) in row_areas.iter().take(rows).enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (col, cell) in col_areas.iter().enumerate() {
            let index = row * columns + col;
            if let Some(user) = app.featured.get(index) {
                let selected = index == app.selected_featured;
                let border = if selected {
                    Style::default().fg(app.theme.highlight_fg).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.border)
                };
                let name_style = if selected {
                    Style::default()
                        .fg(app.theme.highlight_fg)
                        .bg(app.theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text).add_modifier(Modifier::BOLD)
                };
                let lines = vec![
                    Line::from(Span::styled(user.name, name_style)),
                    Line::from(Span::styled(
                        format!("@{}", user.login),
                        Style::default().fg(app.theme.link_fg),
                    )),
                    Line::from(Span::styled(
                        user.avatar_url,
                        Style::default().fg(app.theme.muted),
                    )),
                ];
                let card = Paragraph::new(lines)
                    .block(Block::default().borders(Borders::ALL).border_style(border));
                f.render_widget(card, *cell);
            }
        }
    }
}
