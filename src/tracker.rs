//! Fetch lifecycle for a team page.
//!
//! The upstream UI this crate feeds keeps one team in view at a time and
//! refetches on navigation. [`TeamTracker`] owns that lifecycle: it
//! publishes [`FetchState`] transitions on a watch channel, and it stamps
//! every load with a token from a monotonically increasing counter so that a
//! slow response for a team the caller has already navigated away from is
//! discarded instead of overwriting newer state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, instrument};

use crate::client::IplClient;
use crate::error::IplError;
use crate::model::TeamMatchesView;

/// Outcome of the most recent load, as presentation code sees it.
#[derive(Debug, Clone)]
pub enum FetchState {
    /// A load is in flight and nothing newer has resolved.
    Loading,
    /// The most recent load resolved successfully.
    Ready(TeamMatchesView),
    /// The most recent load failed.
    Failed(Arc<IplError>),
}

impl FetchState {
    /// The view carried by `Ready`, if that is the current state.
    pub fn view(&self) -> Option<&TeamMatchesView> {
        match self {
            FetchState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Tracks the team currently in view and the state of its fetch.
pub struct TeamTracker {
    client: IplClient,
    state: watch::Sender<FetchState>,
    generation: AtomicU64,
}

impl TeamTracker {
    /// Create a tracker around `client`. The initial state is
    /// [`FetchState::Loading`], matching a page that mounts before its
    /// first fetch resolves.
    pub fn new(client: IplClient) -> Self {
        let (state, _) = watch::channel(FetchState::Loading);
        Self {
            client,
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Observe state transitions. A receiver sees the current state
    /// immediately and can `changed().await` for edges.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Fetch `team_id` and publish the outcome.
    ///
    /// Concurrent loads race safely: each takes the next token, and only
    /// the holder of the newest token commits its outcome. A superseded
    /// load's response is discarded; the request itself is left to finish
    /// on its own.
    #[instrument(skip(self))]
    pub async fn load(&self, team_id: &str) {
        let token = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        self.state.send_replace(FetchState::Loading);

        let outcome = match self.client.get_team_matches(team_id).await {
            Ok(view) => FetchState::Ready(view),
            Err(e) => FetchState::Failed(Arc::new(e)),
        };

        // The token check runs inside the channel's critical section, so a
        // stale commit can never interleave past a newer one.
        let committed = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::Relaxed) == token {
                *state = outcome;
                true
            } else {
                false
            }
        });

        if committed {
            debug!(team_id, token, "committed fetch outcome");
        } else {
            debug!(team_id, token, "discarded stale fetch outcome");
        }
    }
}
