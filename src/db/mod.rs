mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::document::Document;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whole-document persistence. Handlers load, mutate in memory and save the
/// full document back; there are no partial writes.
#[async_trait]
pub trait Store: Send + Sync {
    async fn load(&self) -> Result<Document, StoreError>;
    async fn save(&self, document: &Document) -> Result<(), StoreError>;
}
