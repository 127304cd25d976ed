//! Shared UI components (header, status bar, help modal, layout helpers).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, InputMode, KeyAction};

const PLACEHOLDER: &str = "Search GitHub users...";

/// Title plus the search prompt.
pub fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let loading = app.search.state().loading;
    let mut spans = vec![
        Span::styled(
            "GitHub Profile Search",
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    match app.input_mode {
        InputMode::Search => {
            spans.push(Span::raw("Search: "));
            spans.push(Span::styled(
                format!("{}█", app.search_query),
                Style::default().fg(app.theme.highlight_fg),
            ));
        }
        _ if app.search_query.is_empty() => {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(app.theme.muted)));
        }
        _ => spans.push(Span::raw(format!("Search: {}", app.search_query))),
    }
    if loading {
        spans.push(Span::styled("  ...", Style::default().fg(app.theme.muted)));
    }

    let p = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title("gh-lookup")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, area);
}

/// Render the bottom status bar with mode, lookup phase and any notice.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
        InputMode::Modal => "HELP",
    };
    let hints = match (app.input_mode, app.detail.is_some()) {
        (InputMode::Search, _) => "Enter: search  Esc: cancel  Ctrl+U: clear",
        (_, true) => "Esc: close  o: open profile  Enter/r: open repo  ?: help  q: quit",
        (_, false) => "/: search  Enter: look up  ?: help  q: quit",
    };
    let mut msg = format!("mode: {mode}  lookup: {}", app.search.phase().label());
    if let Some(notice) = &app.notice {
        msg.push_str("  | ");
        msg.push_str(notice);
    }
    msg.push_str("  | ");
    msg.push_str(hints);
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Help modal listing the active key bindings.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState, scroll: u16) {
    let width = 64u16.min(area.width.saturating_sub(4)).max(40);
    let height = 20u16.min(area.height.saturating_sub(2)).max(10);
    let rect = centered_rect(width, height, area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let italic = Style::default().add_modifier(Modifier::ITALIC);
    let row = |label: &'static str, keys: String| {
        Line::from(vec![
            Span::raw(format!("  {label:<24}")),
            Span::styled(keys, italic),
        ])
    };
    let bound = |action: KeyAction| app.keymap.keys_for(action).join(", ");

    let lines = vec![
        Line::from(Span::styled("General", bold)),
        row("Search", bound(KeyAction::StartSearch)),
        row("Help", bound(KeyAction::OpenHelp)),
        row("Quit", bound(KeyAction::Quit)),
        Line::raw(""),
        Line::from(Span::styled("Featured users", bold)),
        row("Move", format!(
            "{} / {} / {} / {}",
            bound(KeyAction::MoveLeft),
            bound(KeyAction::MoveDown),
            bound(KeyAction::MoveUp),
            bound(KeyAction::MoveRight)
        )),
        row("Look up", bound(KeyAction::Select)),
        Line::raw(""),
        Line::from(Span::styled("Profile details", bold)),
        row("Close", bound(KeyAction::Close)),
        row("Open profile", bound(KeyAction::OpenProfile)),
        row("Select repository", format!(
            "{} / {}",
            bound(KeyAction::MoveUp),
            bound(KeyAction::MoveDown)
        )),
        row("Open repository", format!(
            "{}, {}",
            bound(KeyAction::Select),
            bound(KeyAction::OpenRepository)
        )),
        Line::raw(""),
        Line::from(Span::styled("Search prompt", bold)),
        row("Submit / cancel", "Enter / Esc".to_string()),
        row("Clear", "Ctrl+U".to_string()),
    ];

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title("Help (Esc to close)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 10, 4);
        let r = centered_rect(40, 20, area);
        assert_eq!(r, area);

        let r = centered_rect(4, 2, Rect::new(2, 2, 10, 10));
        assert_eq!(r, Rect::new(5, 6, 4, 2));
    }
}
