use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::{AppState, DetailView, Theme};
use crate::github::{Profile, RepositorySummary};
use crate::ui::components::centered_rect;

/// Overlay with the resolved profile and its recent repositories.
pub fn render_profile_overlay(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(profile) = app.search.profile() else {
        return;
    };
    let theme = &app.theme;

    let rect = centered_rect(area.width.saturating_sub(4).min(110), area.height, area);
    let block = Block::default()
        .title(format!("Profile: {}", profile.login))
        .title_bottom(Line::from(" Esc: close  o: open on GitHub ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight_fg));
    let inner = block.inner(rect);
    f.render_widget(Clear, rect);
    f.render_widget(block, rect);

    let summary = summary_lines(profile, theme);
    let info = info_lines(profile, theme);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary.len() as u16 + 1),
            Constraint::Length(info.len() as u16 + 1),
            Constraint::Min(3),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(summary).wrap(Wrap { trim: true }), parts[0]);
    f.render_widget(
        Paragraph::new(info).style(Style::default().fg(theme.text)),
        parts[1],
    );
    render_repositories(f, parts[2], app.detail.as_ref(), theme);
}

fn summary_lines<'a>(profile: &'a Profile, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            profile.display_name(),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("@{}", profile.login), Style::default().fg(theme.link_fg)),
            Span::raw("  "),
            Span::styled(profile.html_url.as_str(), Style::default().fg(theme.muted)),
        ]),
    ];
    if let Some(bio) = profile.bio() {
        lines.push(Line::from(Span::styled(bio, Style::default().fg(theme.text))));
    }
    let text = Style::default().fg(theme.text);
    let dot = Span::styled(" · ", Style::default().fg(theme.muted));
    lines.push(Line::from(vec![
        Span::styled(format!("{} followers", profile.followers), text),
        dot.clone(),
        Span::styled(format!("{} following", profile.following), text),
        Span::raw("   "),
        Span::styled(format!("{} repositories", profile.public_repos), text),
        dot,
        Span::styled(format!("{} gists", profile.public_gists), text),
    ]));
    lines
}

fn info_lines(profile: &Profile, theme: &Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted);
    let row = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name:<10}"), label),
            Span::raw(value),
        ])
    };
    let mut lines = Vec::new();
    if let Some(location) = profile.location() {
        lines.push(row("Location", location.to_string()));
    }
    if let Some(blog) = profile.blog_url() {
        lines.push(row("Blog", blog));
    }
    if let Some(company) = profile.company() {
        lines.push(row("Company", company.to_string()));
    }
    let handle = profile.twitter_username.as_deref();
    if let (Some(handle), Some(url)) = (handle, profile.twitter_url()) {
        lines.push(row("Twitter", format!("@{handle}  {url}")));
    }
    lines.push(row("Joined", profile.joined()));
    lines
}

fn render_repositories(f: &mut Frame, area: Rect, detail: Option<&DetailView>, theme: &Theme) {
    let block = Block::default()
        .title("Recent Repositories")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));

    let placeholder = match detail {
        None => Some("Loading repositories..."),
        Some(d) if d.is_loading() => Some("Loading repositories..."),
        Some(d) if d.repositories().is_empty() => Some("No recent repositories."),
        Some(_) => None,
    };
    if let Some(text) = placeholder {
        let p = Paragraph::new(text)
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(p, area);
        return;
    }
    let Some(detail) = detail else {
        return;
    };

    let items: Vec<ListItem> = detail
        .repositories()
        .iter()
        .map(|r| repository_item(r, theme))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("▶ ")
        .highlight_style(
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default().with_selected(Some(detail.selected_repo));
    f.render_stateful_widget(list, area, &mut state);
}

fn repository_item<'a>(repo: &'a RepositorySummary, theme: &Theme) -> ListItem<'a> {
    let mut lines = vec![Line::from(Span::styled(
        repo.name.as_str(),
        Style::default().fg(theme.link_fg).add_modifier(Modifier::BOLD),
    ))];
    if let Some(description) = repo.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(Line::from(Span::styled(description, Style::default().fg(theme.text))));
    }
    let mut meta = Vec::new();
    if let Some(language) = repo.language.as_deref() {
        meta.push(format!("● {language}"));
    }
    meta.push(format!("★ {}", repo.stargazers_count));
    meta.push(format!("⑂ {}", repo.forks_count));
    meta.push(format!("updated {}", repo.updated_at.format("%Y-%m-%d")));
    lines.push(Line::from(Span::styled(meta.join("   "), Style::default().fg(theme.muted))));
    ListItem::new(lines)
}
