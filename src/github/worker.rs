//! Background fetch worker.
//!
//! Owns a tokio runtime and runs the two GitHub reads off the UI thread.
//! Results come back over a channel tagged with the generation that
//! requested them; the UI thread decides whether they are still wanted.

use std::sync::Arc;

use anyhow::Context;
use crossbeam_channel::{Receiver, Sender, unbounded};
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use tracing::debug;

use super::{GithubClient, Profile, RepositorySummary};
use crate::error::{LookupError, Result};
use crate::search::Generation;

/// Completion delivered back to the UI thread.
#[derive(Debug)]
pub enum FetchEvent {
    Profile {
        generation: Generation,
        result: std::result::Result<Profile, LookupError>,
    },
    Repositories {
        view: Generation,
        repositories: Vec<RepositorySummary>,
    },
}

pub struct FetchWorker {
    runtime: Runtime,
    client: Arc<GithubClient>,
    events: Sender<FetchEvent>,
    profile_task: Option<JoinHandle<()>>,
    repositories_task: Option<JoinHandle<()>>,
}

impl FetchWorker {
    /// Start the worker runtime. The receiver yields every completion.
    pub fn new(client: GithubClient) -> Result<(Self, Receiver<FetchEvent>)> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("gh-lookup-fetch")
            .enable_all()
            .build()
            .context("failed to build fetch runtime")?;
        let (events, rx) = unbounded();
        let worker = Self {
            runtime,
            client: Arc::new(client),
            events,
            profile_task: None,
            repositories_task: None,
        };
        Ok((worker, rx))
    }

    /// Fetch `username`'s profile, aborting any lookup still running.
    pub fn lookup_profile(&mut self, generation: Generation, username: String) {
        abort(self.profile_task.take());
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        debug!(%generation, %username, "spawning profile lookup");
        self.profile_task = Some(self.runtime.spawn(async move {
            let result = client.fetch_profile(&username).await;
            if events.send(FetchEvent::Profile { generation, result }).is_err() {
                debug!(%generation, "ui closed; dropping profile result");
            }
        }));
    }

    /// Fetch recent repositories for the detail view tagged `view`.
    pub fn load_repositories(&mut self, view: Generation, login: String) {
        abort(self.repositories_task.take());
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        debug!(%view, %login, "spawning repository fetch");
        self.repositories_task = Some(self.runtime.spawn(async move {
            let repositories = client.fetch_repositories(&login).await;
            if events.send(FetchEvent::Repositories { view, repositories }).is_err() {
                debug!(%view, "ui closed; dropping repositories");
            }
        }));
    }

    /// Stop the repository fetch of a view that was just torn down.
    pub fn cancel_repositories(&mut self) {
        abort(self.repositories_task.take());
    }
}

fn abort(task: Option<JoinHandle<()>>) {
    if let Some(task) = task {
        if !task.is_finished() {
            task.abort();
        }
    }
}
