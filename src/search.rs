//! Profile lookup state machine.
//!
//! [`SearchController`] owns the single live [`SearchState`] and tags every
//! lookup it starts with a [`Generation`]. Only the completion carrying the
//! newest generation is applied; anything older is discarded, so overlapping
//! lookups resolve latest-wins and never merge.

use std::fmt;

use crate::error::LookupError;
use crate::github::Profile;

/// Monotonically increasing marker attached to an outstanding request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Advance `counter` and return the new value as a token.
    pub fn bump(counter: &mut u64) -> Self {
        *counter += 1;
        Self(*counter)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of the most recent lookup as seen by the UI.
///
/// `data` and `error` are never both set; `loading` implies both are clear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<Profile>,
}

impl SearchState {
    fn pending() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }

    fn resolved(profile: Profile) -> Self {
        Self {
            loading: false,
            error: None,
            data: Some(profile),
        }
    }

    fn failed(err: &LookupError) -> Self {
        Self {
            loading: false,
            error: Some(err.to_string()),
            data: None,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        match (self.loading, &self.error, &self.data) {
            (true, _, _) => SearchPhase::Pending,
            (false, _, Some(_)) => SearchPhase::Resolved,
            (false, Some(_), None) => SearchPhase::Failed,
            (false, None, None) => SearchPhase::Idle,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Pending,
    Resolved,
    Failed,
}

impl SearchPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "loading",
            Self::Resolved => "resolved",
            Self::Failed => "failed",
        }
    }
}

/// A lookup the caller must now perform; hand the outcome back to
/// [`SearchController::complete`] together with `generation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: Generation,
    pub username: String,
}

#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    counter: u64,
    in_flight: Option<Generation>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn phase(&self) -> SearchPhase {
        self.state.phase()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.state.data.as_ref()
    }

    /// Generation of the lookup whose result will be accepted, if any.
    pub fn in_flight(&self) -> Option<Generation> {
        self.in_flight
    }

    /// Start a lookup for `raw` (trimmed).
    ///
    /// Blank input is refused with [`LookupError::EmptyInput`] and leaves the
    /// state untouched. A submit while another lookup is pending supersedes it.
    pub fn submit(&mut self, raw: &str) -> Result<LookupTicket, LookupError> {
        let username = raw.trim();
        if username.is_empty() {
            return Err(LookupError::EmptyInput);
        }
        let generation = Generation::bump(&mut self.counter);
        if let Some(prev) = self.in_flight.replace(generation) {
            tracing::debug!(superseded = %prev, current = %generation, "lookup superseded");
        }
        self.state = SearchState::pending();
        Ok(LookupTicket {
            generation,
            username: username.to_string(),
        })
    }

    /// Apply the outcome of lookup `generation`. Returns `false` and changes
    /// nothing when the completion is stale.
    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<Profile, LookupError>,
    ) -> bool {
        if self.in_flight != Some(generation) {
            tracing::debug!(
                %generation,
                current = ?self.in_flight,
                "discarding stale lookup result"
            );
            return false;
        }
        self.in_flight = None;
        self.state = match result {
            Ok(profile) => SearchState::resolved(profile),
            Err(err) => SearchState::failed(&err),
        };
        true
    }

    /// Dismiss the resolved profile. Only `Resolved` reacts; every other
    /// phase is left as is and `false` is returned.
    pub fn close(&mut self) -> bool {
        if self.phase() != SearchPhase::Resolved {
            return false;
        }
        self.state.data = None;
        true
    }
}
