use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Store, StoreError};
use crate::models::document::Document;

/// In-process store, used by tests to exercise handlers without touching disk.
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<Document>,
}

impl MemoryStore {
    pub fn new(document: Document) -> Self {
        Self { document: Mutex::new(document) }
    }

    pub async fn snapshot(&self) -> Document {
        self.document.lock().await.clone()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load(&self) -> Result<Document, StoreError> {
        Ok(self.document.lock().await.clone())
    }

    async fn save(&self, document: &Document) -> Result<(), StoreError> {
        *self.document.lock().await = document.clone();
        Ok(())
    }
}
