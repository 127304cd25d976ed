// Unit tests for gh-lookup
// These tests work with the public API without touching the network

fn profile_json(login: &str) -> String {
    format!(
        r#"{{
            "login": "{login}",
            "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
            "html_url": "https://github.com/{login}",
            "name": null,
            "bio": null,
            "public_repos": 0,
            "followers": 0,
            "following": 0,
            "location": null,
            "blog": "",
            "company": null,
            "created_at": "2011-01-25T18:44:36Z",
            "twitter_username": null
        }}"#
    )
}

fn profile(login: &str) -> gh_lookup::github::Profile {
    serde_json::from_str(&profile_json(login)).expect("profile json")
}

#[cfg(test)]
mod error_handling_tests {
    use gh_lookup::LookupError;
    use gh_lookup::error::{PROFILE_FETCH_FAILED, UNEXPECTED_ERROR};

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(LookupError::EmptyInput.to_string(), "Please enter a username.");
        assert_eq!(
            LookupError::NotFound.to_string(),
            "Profile not found. Please try another username."
        );
        assert_eq!(LookupError::fetch_failed().to_string(), PROFILE_FETCH_FAILED);
    }

    #[test]
    fn test_blank_transport_message_falls_back() {
        assert_eq!(LookupError::transport("").to_string(), UNEXPECTED_ERROR);
        assert_eq!(LookupError::transport("  ").to_string(), UNEXPECTED_ERROR);
        assert_eq!(LookupError::transport("connection reset").to_string(), "connection reset");
    }

    #[test]
    fn test_context_error_chaining() {
        use anyhow::Context;
        let res: gh_lookup::Result<()> = Err(anyhow::anyhow!("disk full")).context("write theme");
        let err = res.expect_err("error");
        assert_eq!(format!("{err:#}"), "write theme: disk full");
    }
}

#[cfg(test)]
mod search_tests {
    use super::profile;
    use gh_lookup::LookupError;
    use gh_lookup::search::{SearchController, SearchPhase};

    #[test]
    fn test_blank_submit_leaves_state_untouched() {
        let mut c = SearchController::new();
        assert_eq!(c.submit("   "), Err(LookupError::EmptyInput));
        assert_eq!(c.phase(), SearchPhase::Idle);
        assert!(c.in_flight().is_none());
    }

    #[test]
    fn test_submit_trims_and_goes_pending() {
        let mut c = SearchController::new();
        let ticket = c.submit("  tj \n").expect("ticket");
        assert_eq!(ticket.username, "tj");
        assert_eq!(c.phase(), SearchPhase::Pending);
        assert!(c.state().loading);
        assert!(c.state().error.is_none());
        assert!(c.state().data.is_none());
    }

    #[test]
    fn test_latest_submit_wins_in_either_completion_order() {
        // first result arrives after the second
        let mut c = SearchController::new();
        let first = c.submit("alice").expect("first");
        let second = c.submit("bob").expect("second");
        assert!(c.complete(second.generation, Ok(profile("bob"))));
        assert!(!c.complete(first.generation, Ok(profile("alice"))));
        assert_eq!(c.profile().map(|p| p.login.as_str()), Some("bob"));

        // first result arrives before the second
        let mut c = SearchController::new();
        let first = c.submit("alice").expect("first");
        let second = c.submit("bob").expect("second");
        assert!(!c.complete(first.generation, Err(LookupError::NotFound)));
        assert_eq!(c.phase(), SearchPhase::Pending);
        assert!(c.complete(second.generation, Ok(profile("bob"))));
        assert_eq!(c.phase(), SearchPhase::Resolved);
    }

    #[test]
    fn test_failure_then_close_is_noop() {
        let mut c = SearchController::new();
        let t = c.submit("ghost").expect("ticket");
        assert!(c.complete(t.generation, Err(LookupError::NotFound)));
        assert_eq!(c.phase(), SearchPhase::Failed);
        assert!(!c.close());
        assert_eq!(
            c.state().error.as_deref(),
            Some("Profile not found. Please try another username.")
        );
    }

    #[test]
    fn test_close_after_resolution_returns_to_idle() {
        let mut c = SearchController::new();
        let t = c.submit("tj").expect("ticket");
        assert!(c.complete(t.generation, Ok(profile("tj"))));
        assert!(c.close());
        assert_eq!(c.phase(), SearchPhase::Idle);
        assert!(!c.close());
    }
}

#[cfg(test)]
mod model_tests {
    use super::profile;

    #[test]
    fn test_profile_with_every_optional_absent() {
        let p = profile("tj");
        assert_eq!(p.display_name(), "tj");
        assert!(p.bio().is_none());
        assert!(p.location().is_none());
        assert!(p.company().is_none());
        assert!(p.blog_url().is_none());
        assert!(p.twitter_url().is_none());
        assert_eq!(p.public_gists, 0);
        assert_eq!(p.joined(), "Jan 25, 2011");
    }

    #[test]
    fn test_featured_users_seed() {
        use gh_lookup::github::FEATURED_USERS;
        let logins: Vec<&str> = FEATURED_USERS.iter().map(|u| u.login).collect();
        assert_eq!(logins, ["gaearon", "sindresorhus", "tj", "addyosmani", "kentcdodds"]);
        assert!(FEATURED_USERS.iter().all(|u| u.avatar_url.starts_with("https://")));
    }
}

#[cfg(test)]
mod app_state_tests {
    use gh_lookup::app::{AppState, Effect, InputMode};

    #[test]
    fn test_app_state_creation() {
        let app = AppState::default();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.featured.len(), 5);
        assert_eq!(app.selected_featured().map(|u| u.login), Some("gaearon"));
        assert!(app.detail.is_none());
        assert!(app.modal.is_none());
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_blank_lookup_sets_notice_without_effects() {
        let mut app = AppState::default();
        assert!(app.submit_lookup("  ").is_empty());
        assert_eq!(app.notice.as_deref(), Some("Please enter a username."));
    }

    #[test]
    fn test_close_without_profile_is_noop() {
        let mut app = AppState::default();
        assert!(app.close_detail().is_empty());
        let effects = app.submit_lookup("tj");
        assert!(matches!(effects.as_slice(), [Effect::LookupProfile(_)]));
        assert!(app.close_detail().is_empty());
    }
}

#[cfg(test)]
mod config_file_tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use gh_lookup::app::{Keymap, Theme};

    fn temp_dir(tag: &str) -> PathBuf {
        let nonce = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        std::env::temp_dir().join(format!("ghl_{tag}_{}_{nonce}", std::process::id()))
    }

    #[test]
    fn test_theme_roundtrip_and_init() {
        let dir = temp_dir("theme");
        let path = dir.join("theme.conf");

        let mut t = Theme::mocha();
        t.error_fg = ratatui::style::Color::Rgb(0x12, 0x34, 0x56);
        t.highlight_bg = ratatui::style::Color::Reset;
        t.write_file(&path).expect("write theme");
        assert_eq!(Theme::from_file(&path), Some(t));

        let init = dir.join("nested").join("theme.conf");
        let created = Theme::load_or_init(&init);
        assert!(init.exists());
        assert_eq!(created, Theme::mocha());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keymap_roundtrip_and_init() {
        let dir = temp_dir("keys");
        let path = dir.join("keybinds.conf");

        let km = Keymap::load_or_init(&path);
        assert!(path.exists());
        assert_eq!(km, Keymap::default());
        assert_eq!(Keymap::from_file(&path), Some(Keymap::default()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_files_read_as_none() {
        let dir = temp_dir("missing");
        assert!(Theme::from_file(&dir.join("theme.conf")).is_none());
        assert!(Keymap::from_file(&dir.join("keybinds.conf")).is_none());
    }
}

#[cfg(test)]
mod ui_tests {
    use super::profile;
    use gh_lookup::LookupError;
    use gh_lookup::app::{AppState, Effect, ModalState, InputMode};
    use gh_lookup::github::worker::FetchEvent;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| gh_lookup::ui::render(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn resolve(app: &mut AppState, login: &str) -> Vec<Effect> {
        let effects = app.submit_lookup(login);
        let Some(Effect::LookupProfile(ticket)) = effects.last() else {
            panic!("expected a lookup effect, got {effects:?}");
        };
        app.apply_fetch_event(FetchEvent::Profile {
            generation: ticket.generation,
            result: Ok(profile(login)),
        })
    }

    #[test]
    fn test_home_renders_featured_grid() {
        let mut app = AppState::default();
        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("GitHub Profile Search"));
        assert!(screen.contains("Featured Developers"));
        assert!(screen.contains("@gaearon"));
        assert!(screen.contains("Search GitHub users..."));
        assert!(app.grid_columns >= 1 && app.grid_columns <= 5);
    }

    #[test]
    fn test_narrow_terminal_uses_one_column() {
        let mut app = AppState::default();
        let _ = draw(&mut app, 30, 40);
        assert_eq!(app.grid_columns, 1);
    }

    #[test]
    fn test_error_banner_shows_failure_message() {
        let mut app = AppState::default();
        let effects = app.submit_lookup("ghost");
        let Some(Effect::LookupProfile(ticket)) = effects.last() else {
            panic!("expected a lookup effect");
        };
        app.apply_fetch_event(FetchEvent::Profile {
            generation: ticket.generation,
            result: Err(LookupError::NotFound),
        });
        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("Profile not found. Please try another username."));
        assert!(screen.contains("Featured Developers"));
    }

    #[test]
    fn test_profile_with_no_optionals_and_loading_repositories() {
        let mut app = AppState::default();
        let effects = resolve(&mut app, "tj");
        assert!(effects.iter().any(|e| matches!(e, Effect::LoadRepositories { .. })));

        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("@tj"));
        assert!(screen.contains("0 followers"));
        assert!(screen.contains("Joined"));
        assert!(screen.contains("Loading repositories..."));
        assert!(!screen.contains("Location"));
    }

    #[test]
    fn test_profile_with_empty_repository_list() {
        let mut app = AppState::default();
        let effects = resolve(&mut app, "tj");
        let view = effects
            .iter()
            .find_map(|e| match e {
                Effect::LoadRepositories { view, .. } => Some(*view),
                _ => None,
            })
            .expect("repositories effect");
        app.apply_fetch_event(FetchEvent::Repositories { view, repositories: Vec::new() });

        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("@tj"));
        assert!(screen.contains("Recent Repositories"));
        assert!(screen.contains("No recent repositories."));
    }

    #[test]
    fn test_help_modal_lists_bindings() {
        let mut app = AppState::default();
        app.modal = Some(ModalState::Help { scroll: 0 });
        app.input_mode = InputMode::Modal;
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Help (Esc to close)"));
        assert!(screen.contains("Ctrl+c"));
    }

    #[test]
    fn test_ui_render_tiny_terminal_does_not_panic() {
        let mut app = AppState::default();
        let _ = draw(&mut app, 10, 5);
        let _ = resolve(&mut app, "tj");
        let _ = draw(&mut app, 10, 5);
    }
}
