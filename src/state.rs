//! Shared application state injected into every Axum handler.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::db::sqlite::SqliteStore;

/// State shared across all HTTP handlers.
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Persistent question / category store.
    pub store: Arc<SqliteStore>,
    /// Process-wide RNG for quiz draws, seeded from entropy once at startup.
    /// Quiz state itself is client-carried; this is the only in-process
    /// mutable state the server holds.
    pub rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(config: Config, store: SqliteStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}
