//! # Data Loader
//!
//! Resolves a source reference into a resource store without letting an
//! out-of-date fetch corrupt the display. The state machine is
//! `Idle → Loading → {Loaded | Failed}`, with `Loading → Loading` reachable
//! when a new request supersedes one still in flight.
//!
//! Two guards carry the whole correctness story:
//!
//! - **Unchanged reference is a no-op.** Requesting the reference that is
//!   already loaded or in flight does nothing, so repeated idempotent
//!   writes of the same source cause no network traffic.
//! - **Latest wins.** Every accepted request bumps a generation counter
//!   and fetch outcomes carry the generation they were issued under.
//!   [`DataLoader::commit`] drops any outcome from a superseded request,
//!   success or failure alike. There is no transport-level abort — a
//!   superseded fetch runs to completion and its result is simply thrown
//!   away.
//!
//! Known limitation: a fetch that never resolves leaves the state at
//! `Loading` indefinitely. No timeout is imposed here.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use log::{debug, info, warn};

use crate::core::resource::Resource;
use crate::retrieval::provider::{ResourceProvider, RetrievalError};

/// Where the loader currently stands. Read by the title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    /// A fetch for this source reference is in flight.
    Loading(String),
    Loaded,
    Failed(String),
}

/// Completion report from a spawned fetch task.
#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: u64,
    pub source: String,
    pub result: Result<Vec<Resource>, RetrievalError>,
}

pub struct DataLoader {
    provider: Arc<dyn ResourceProvider>,
    tx: Sender<LoadOutcome>,
    state: LoadState,
    /// Most recently requested source reference (in flight or committed).
    active_source: Option<String>,
    /// Bumped on every accepted `set_source`; outcomes carrying an older
    /// value are dropped in `commit`.
    generation: u64,
}

impl DataLoader {
    pub fn new(provider: Arc<dyn ResourceProvider>, tx: Sender<LoadOutcome>) -> Self {
        Self {
            provider,
            tx,
            state: LoadState::Idle,
            active_source: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn active_source(&self) -> Option<&str> {
        self.active_source.as_deref()
    }

    /// Request a load of `source`.
    ///
    /// Requesting the reference that is already loaded or in flight is a
    /// no-op; after a failure the same reference may be requested again
    /// (a retry). Anything else supersedes the previous request: its
    /// eventual outcome will be discarded by [`commit`](Self::commit),
    /// whether it succeeds or fails.
    pub fn set_source(&mut self, source: &str) {
        let retryable = matches!(self.state, LoadState::Failed(_));
        if !retryable && self.active_source.as_deref() == Some(source) {
            debug!("set_source({source}): unchanged, skipping");
            return;
        }

        self.generation += 1;
        self.active_source = Some(source.to_string());
        self.state = LoadState::Loading(source.to_string());
        info!(
            "Loading resource feed from {source} via {} (generation {})",
            self.provider.name(),
            self.generation
        );

        let generation = self.generation;
        let provider = Arc::clone(&self.provider);
        let source = source.to_string();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = provider.fetch(&source).await;
            if tx
                .send(LoadOutcome {
                    generation,
                    source,
                    result,
                })
                .is_err()
            {
                warn!("Load outcome dropped: receiver gone");
            }
        });
    }

    /// Apply a completed fetch.
    ///
    /// Returns the new store when the outcome is current and successful,
    /// for hand-off to the results side; `None` otherwise. A stale outcome
    /// changes nothing. A current failure moves to `Failed` but leaves
    /// whatever store the results side already holds untouched, so the
    /// last good list stays interactive.
    pub fn commit(&mut self, outcome: LoadOutcome) -> Option<Vec<Resource>> {
        if outcome.generation != self.generation {
            debug!(
                "Discarding stale outcome for {} (generation {}, current {})",
                outcome.source, outcome.generation, self.generation
            );
            return None;
        }

        match outcome.result {
            Ok(store) => {
                info!("Loaded {} resources from {}", store.len(), outcome.source);
                self.state = LoadState::Loaded;
                Some(store)
            }
            Err(e) => {
                warn!("Load failed for {}: {e}", outcome.source);
                self.state = LoadState::Failed(e.to_string());
                None
            }
        }
    }
}
