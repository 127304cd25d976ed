//! Application state types and entry glue.
//!
//! [`AppState`] owns the search controller, the mounted detail view and the
//! presentation-only state (selection, input buffer, modal). Every mutation
//! happens on the UI thread; anything that needs the network is returned as
//! an [`Effect`] for the event loop to hand to the fetch worker.
//!
pub mod detail;
pub mod keymap;
pub mod theme;
pub mod update;

use crate::github::worker::FetchEvent;
use crate::github::{FEATURED_USERS, FeaturedUser};
use crate::search::{Generation, LookupTicket, SearchController};

pub use detail::{DetailView, RepositoryState};
pub use keymap::{KeyAction, Keymap};
pub use theme::Theme;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Modal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState {
    Help { scroll: u16 },
}

/// Side effects requested by a state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    LookupProfile(LookupTicket),
    LoadRepositories { view: Generation, login: String },
    CancelRepositories,
    OpenUrl(String),
    Quit,
}

pub struct AppState {
    pub search: SearchController,
    pub detail: Option<DetailView>,
    pub featured: Vec<FeaturedUser>,
    pub selected_featured: usize,
    /// Cards per row in the featured grid, refreshed on every render.
    pub grid_columns: usize,
    pub input_mode: InputMode,
    pub search_query: String,
    pub theme: Theme,
    pub keymap: Keymap,
    pub modal: Option<ModalState>,
    /// One-line notice for the status bar; cleared on the next key press.
    pub notice: Option<String>,
    view_counter: u64,
}

impl AppState {
    pub fn new(theme: Theme, keymap: Keymap) -> Self {
        Self {
            search: SearchController::new(),
            detail: None,
            featured: FEATURED_USERS.to_vec(),
            selected_featured: 0,
            grid_columns: FEATURED_USERS.len(),
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
            keymap,
            modal: None,
            notice: None,
            view_counter: 0,
        }
    }

    pub fn selected_featured(&self) -> Option<&FeaturedUser> {
        self.featured.get(self.selected_featured)
    }

    /// Start a lookup for `raw`. Blank input only produces a notice.
    pub fn submit_lookup(&mut self, raw: &str) -> Vec<Effect> {
        match self.search.submit(raw) {
            Ok(ticket) => {
                tracing::info!(
                    username = %ticket.username,
                    generation = %ticket.generation,
                    "lookup submitted"
                );
                let mut effects = self.sync_detail();
                effects.push(Effect::LookupProfile(ticket));
                effects
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                Vec::new()
            }
        }
    }

    /// Dismiss the profile overlay and return to the featured grid.
    pub fn close_detail(&mut self) -> Vec<Effect> {
        if self.search.close() {
            self.sync_detail()
        } else {
            Vec::new()
        }
    }

    /// Apply a completion from the fetch worker.
    pub fn apply_fetch_event(&mut self, event: FetchEvent) -> Vec<Effect> {
        match event {
            FetchEvent::Profile { generation, result } => {
                if self.search.complete(generation, result) {
                    self.sync_detail()
                } else {
                    Vec::new()
                }
            }
            FetchEvent::Repositories { view, repositories } => {
                let applied = self
                    .detail
                    .as_mut()
                    .is_some_and(|d| d.apply_repositories(view, repositories));
                if !applied {
                    tracing::debug!(%view, "discarding repositories for unmounted view");
                }
                Vec::new()
            }
        }
    }

    /// Mount or unmount the detail view so it exists exactly while a profile
    /// is resolved.
    fn sync_detail(&mut self) -> Vec<Effect> {
        let wanted = self.search.profile().map(|p| p.login.clone());
        if wanted.as_deref() == self.detail.as_ref().map(|d| d.login.as_str()) {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if self.detail.take().is_some() {
            effects.push(Effect::CancelRepositories);
        }
        if let Some(login) = wanted {
            let view = Generation::bump(&mut self.view_counter);
            self.detail = Some(DetailView::mount(login.clone(), view));
            effects.push(Effect::LoadRepositories { view, login });
        }
        effects
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), Keymap::default())
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
