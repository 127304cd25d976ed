//! Profile detail view state: the repository list that lives exactly as long
//! as the overlay showing one resolved profile.

use crate::github::RepositorySummary;
use crate::search::Generation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepositoryState {
    Loading,
    Loaded(Vec<RepositorySummary>),
}

#[derive(Clone, Debug)]
pub struct DetailView {
    pub login: String,
    /// Liveness token; repository results for any other view are dropped.
    pub view: Generation,
    pub repositories: RepositoryState,
    pub selected_repo: usize,
}

impl DetailView {
    pub fn mount(login: impl Into<String>, view: Generation) -> Self {
        Self {
            login: login.into(),
            view,
            repositories: RepositoryState::Loading,
            selected_repo: 0,
        }
    }

    /// Store the repositories fetched for `view`. Returns `false` if they
    /// belong to a view that has since been replaced.
    pub fn apply_repositories(&mut self, view: Generation, repos: Vec<RepositorySummary>) -> bool {
        if view != self.view {
            return false;
        }
        self.repositories = RepositoryState::Loaded(repos);
        self.selected_repo = 0;
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.repositories, RepositoryState::Loading)
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        match &self.repositories {
            RepositoryState::Loading => &[],
            RepositoryState::Loaded(repos) => repos,
        }
    }

    pub fn selected_repository(&self) -> Option<&RepositorySummary> {
        self.repositories().get(self.selected_repo)
    }

    pub fn move_selection(&mut self, down: bool) {
        let len = self.repositories().len();
        if len == 0 {
            self.selected_repo = 0;
        } else if down {
            self.selected_repo = (self.selected_repo + 1).min(len - 1);
        } else {
            self.selected_repo = self.selected_repo.saturating_sub(1);
        }
    }
}
