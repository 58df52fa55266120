pub mod employee;
pub mod health;
pub mod shop;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::Store;

/// Shared by every worker. `write_lock` serializes load-mutate-save cycles
/// within this process.
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub write_lock: Mutex<()>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }
}
