use std::sync::{Arc, Weak};
use std::thread;

use launch_core::{update, Effect, LaunchRecord, LaunchState, Msg, UNKNOWN_ERROR_MESSAGE};
use launch_logging::{launch_debug, launch_info, launch_warn};
use tokio::sync::watch;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{FailureKind, FetchError};

type SharedState = watch::Sender<LaunchState>;

/// Observable launch list state for one UI context.
///
/// Construction starts the single fetch for this store's lifetime on a
/// background thread and returns immediately with the state already loading.
/// Every transition, fetch results and user selection alike, goes through
/// [`launch_core::update`] while holding the channel lock.
pub struct LaunchStore {
    state: Arc<SharedState>,
}

impl LaunchStore {
    /// Creates a store backed by [`ReqwestFetcher`] and starts the fetch.
    pub fn new(settings: FetchSettings) -> Self {
        let fetcher = Arc::new(ReqwestFetcher::new(settings.clone()));
        Self::with_fetcher(fetcher, &settings)
    }

    /// Creates a store that fetches through `fetcher` and starts the fetch.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, settings: &FetchSettings) -> Self {
        let (tx, _rx) = watch::channel(LaunchState::new());
        let store = Self {
            state: Arc::new(tx),
        };

        for effect in apply(&store.state, Msg::FetchStart) {
            match effect {
                Effect::FetchLaunches => {
                    spawn_fetch(fetcher.clone(), settings, Arc::downgrade(&store.state));
                }
            }
        }
        store
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LaunchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<LaunchState> {
        self.state.subscribe()
    }

    /// Resolves once the fetch has completed, successfully or not.
    pub async fn settled(&self) -> LaunchState {
        let mut rx = self.state.subscribe();
        let settled = match rx.wait_for(LaunchState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    /// Marks `record` as the user's selection.
    pub fn select_record(&self, record: LaunchRecord) {
        apply(&self.state, Msg::SelectRecord(record));
    }

    /// Drops the current selection, if any.
    pub fn clear_selection(&self) {
        apply(&self.state, Msg::ClearSelection);
    }
}

fn apply(state: &SharedState, msg: Msg) -> Vec<Effect> {
    let mut effects = Vec::new();
    state.send_modify(|current| {
        let (next, produced) = update(std::mem::take(current), msg);
        *current = next;
        effects = produced;
    });
    effects
}

fn spawn_fetch(fetcher: Arc<dyn Fetcher>, settings: &FetchSettings, state: Weak<SharedState>) {
    let url = match settings.launches_url() {
        Ok(url) => url,
        Err(err) => {
            deliver(&state, Err(err));
            return;
        }
    };
    launch_info!("Fetching launches from {}", url);

    let worker_state = state.clone();
    let spawned = thread::Builder::new()
        .name("launch-fetch".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    deliver(
                        &worker_state,
                        Err(FetchError::new(FailureKind::Network, err.to_string())),
                    );
                    return;
                }
            };
            let result = runtime.block_on(fetcher.fetch_launches(url.as_str()));
            deliver(&worker_state, result);
        });

    if let Err(err) = spawned {
        deliver(
            &state,
            Err(FetchError::new(FailureKind::Network, err.to_string())),
        );
    }
}

fn deliver(state: &Weak<SharedState>, result: Result<Vec<LaunchRecord>, FetchError>) {
    let Some(state) = state.upgrade() else {
        launch_debug!("Launch store dropped before the fetch completed; discarding result");
        return;
    };

    match result {
        Ok(records) => {
            launch_info!("Fetched {} launches", records.len());
            apply(&state, Msg::FetchSuccess(records));
        }
        Err(err) => {
            // Logged before the transition is published, so observers see it in order.
            state.send_modify(|current| {
                let (next, _) = update(std::mem::take(current), Msg::FetchError(err.message));
                let message = next.error_message().unwrap_or(UNKNOWN_ERROR_MESSAGE);
                launch_warn!("Fetch error ({}): {}", err.kind, message);
                *current = next;
            });
        }
    }
}
