//! Keybinding configuration: parse `keybinds.conf`, provide defaults, and map keys to actions.
//!
//! Only normal-mode keys are configurable. Text entry in the search prompt
//! always uses the literal keys typed.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic actions available outside of text entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Focus the search prompt.
    StartSearch,
    /// Show the help modal.
    OpenHelp,
    /// Look up the selected featured user.
    Select,
    /// Dismiss the profile overlay.
    Close,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Open the resolved profile in the browser.
    OpenProfile,
    /// Open the selected repository in the browser.
    OpenRepository,
    /// Swallow the key.
    Ignore,
}

const ACTIONS: [(KeyAction, &str); 12] = [
    (KeyAction::Quit, "Quit"),
    (KeyAction::StartSearch, "StartSearch"),
    (KeyAction::OpenHelp, "OpenHelp"),
    (KeyAction::Select, "Select"),
    (KeyAction::Close, "Close"),
    (KeyAction::MoveUp, "MoveUp"),
    (KeyAction::MoveDown, "MoveDown"),
    (KeyAction::MoveLeft, "MoveLeft"),
    (KeyAction::MoveRight, "MoveRight"),
    (KeyAction::OpenProfile, "OpenProfile"),
    (KeyAction::OpenRepository, "OpenRepository"),
    (KeyAction::Ignore, "Ignore"),
];

pub fn format_action(a: KeyAction) -> &'static str {
    ACTIONS
        .iter()
        .find(|(action, _)| *action == a)
        .map(|(_, name)| *name)
        .unwrap_or("Ignore")
}

fn parse_action(s: &str) -> Option<KeyAction> {
    let s = s.trim();
    ACTIONS.iter().find(|(_, name)| *name == s).map(|(a, _)| *a)
}

/// Maps `(modifiers, code)` pairs to [`KeyAction`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Arrow keys and hjkl for navigation, `/` search, `?` help, `q` quit.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Char('/')), KeyAction::StartSearch);
        bindings.insert((M::NONE, Char('?')), KeyAction::OpenHelp);
        // Some terminals report '?' with SHIFT
        bindings.insert((M::SHIFT, Char('?')), KeyAction::OpenHelp);
        bindings.insert((M::NONE, Enter), KeyAction::Select);
        bindings.insert((M::NONE, Esc), KeyAction::Close);
        bindings.insert((M::NONE, Backspace), KeyAction::Close);
        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Left), KeyAction::MoveLeft);
        bindings.insert((M::NONE, Right), KeyAction::MoveRight);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('h')), KeyAction::MoveLeft);
        bindings.insert((M::NONE, Char('l')), KeyAction::MoveRight);
        bindings.insert((M::NONE, Char('o')), KeyAction::OpenProfile);
        bindings.insert((M::NONE, Char('r')), KeyAction::OpenRepository);
        Self { bindings }
    }

    /// Load `path`, or write the defaults there and return them.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let km = Self::default();
        if let Err(e) = km.write_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "could not write default keybindings"
            );
        }
        km
    }

    pub fn from_file(path: &Path) -> Option<Self> {
        std::fs::read_to_string(path).ok().map(|c| Self::parse(&c))
    }

    /// Parse `<Action> = <KeySpec>` lines on top of the defaults.
    /// Malformed lines are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            if let (Some(action), Some(key)) = (parse_action(lhs), parse_key(rhs)) {
                map.bindings.insert(key, action);
            }
        }
        map
    }

    pub fn to_config(&self) -> String {
        let mut buf = String::new();
        buf.push_str("# gh-lookup keybindings\n");
        buf.push_str("# Format: <Action> = <KeySpec>\n");
        buf.push_str(
            "# KeySpec examples: q, Ctrl+c, Enter, Esc, Backspace, Up, Down, Left, Right, /, ?\n",
        );
        buf.push_str("# Actions: ");
        buf.push_str(&ACTIONS.map(|(_, name)| name).join(", "));
        buf.push_str("\n\n");

        let mut lines: Vec<String> = self
            .bindings
            .iter()
            .filter(|((mods, _), _)| !mods.contains(KeyModifiers::SHIFT))
            .map(|((mods, code), action)| {
                format!("{} = {}", format_action(*action), Self::format_key(*mods, *code))
            })
            .collect();
        lines.sort();
        for line in lines {
            let _ = writeln!(buf, "{line}");
        }
        buf
    }

    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_config())
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// Keys bound to `action`, formatted and sorted, for help text.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .filter(|((mods, _), _)| !mods.contains(KeyModifiers::SHIFT))
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .collect();
        keys.sort();
        keys
    }

    /// Human-readable key spec, e.g. `Ctrl+c`, `Enter`, `/`.
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Backspace => "Backspace".to_string(),
            Tab => "Tab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Left => "Left".to_string(),
            Right => "Right".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{code:?}"),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{base}")
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = match s.strip_prefix("Ctrl+") {
        Some(after) => (KeyModifiers::CONTROL, after),
        None => (KeyModifiers::NONE, s),
    };
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Backspace" => Backspace,
        "Tab" => Tab,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_resolve() {
        let km = Keymap::default();
        assert_eq!(km.resolve(&key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(km.resolve(&key(KeyCode::Esc)), Some(KeyAction::Close));
        assert_eq!(km.resolve(&key(KeyCode::Char('j'))), Some(KeyAction::MoveDown));
        assert_eq!(km.resolve(&key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn parse_overrides_and_skips_garbage() {
        let km = Keymap::parse(
            "Quit = x\nNotAnAction = y\nMoveUp = TooLong\nOpenProfile = Ctrl+o\n",
        );
        assert_eq!(km.resolve(&key(KeyCode::Char('x'))), Some(KeyAction::Quit));
        assert_eq!(km.resolve(&key(KeyCode::Char('y'))), None);
        assert_eq!(
            km.resolve(&KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL)),
            Some(KeyAction::OpenProfile)
        );
        // defaults remain
        assert_eq!(km.resolve(&key(KeyCode::Char('q'))), Some(KeyAction::Quit));
    }

    #[test]
    fn written_config_parses_back_to_same_bindings() {
        let km = Keymap::default();
        let parsed = Keymap::parse(&km.to_config());
        assert_eq!(parsed, km);
    }

    #[test]
    fn keys_for_lists_plain_bindings() {
        let km = Keymap::default();
        assert_eq!(km.keys_for(KeyAction::Close), vec!["Backspace", "Esc"]);
        assert_eq!(km.keys_for(KeyAction::Quit), vec!["Ctrl+c", "q"]);
    }
}
