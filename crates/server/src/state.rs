//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use question_board_core::{Aggregate, JsonStore, StoreError};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// The board aggregate lives behind a single mutex so concurrent requests
/// serialize their read-modify-write cycles; every mutation is followed by
/// an explicit [`commit`](Self::commit) that rewrites the data file.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: JsonStore,
    board: Mutex<Aggregate>,
}

impl AppState {
    /// Create the application state, loading the persisted aggregate.
    ///
    /// A missing data file yields the default aggregate; it is written out
    /// on the first mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file exists but cannot be loaded.
    pub fn new(config: ServerConfig) -> Result<Self, StoreError> {
        let store = JsonStore::new(&config.data_file);
        let board = store.load()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                board: Mutex::new(board),
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Lock the board aggregate for a read-modify-write cycle.
    pub async fn board(&self) -> tokio::sync::MutexGuard<'_, Aggregate> {
        self.inner.board.lock().await
    }

    /// Persist the given aggregate snapshot to the store.
    ///
    /// Call while still holding the lock returned by [`board`](Self::board)
    /// so no concurrent mutation slips between mutate and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the failure propagates to the
    /// request that triggered the mutation.
    pub fn commit(&self, board: &Aggregate) -> Result<(), StoreError> {
        self.inner.store.save(board)
    }
}
