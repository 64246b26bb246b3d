//! Shared application state for all routes.

use crate::store::GameStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
}

impl AppState {
    pub fn new(store: impl GameStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
