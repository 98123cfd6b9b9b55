// Application state (AppState)

use crate::core::config::Config;
use crate::core::error::ApiError;
use crate::stores::user_store::UserStore;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared application state
///
/// The user store sits behind a single mutex so store operations never overlap.
#[derive(Clone)]
pub struct AppState {
    /// User profiles and their backing file
    pub store: Arc<Mutex<UserStore>>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: UserStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config: Arc::new(config),
        }
    }

    /// Lock the user store for the duration of one operation
    pub fn store(&self) -> Result<MutexGuard<'_, UserStore>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::InternalError("user store lock poisoned".to_string()))
    }
}
