use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use tokio::fs;
use tokio::sync::Mutex;

use super::{Store, StoreError};
use crate::models::document::Document;

/// Keeps the document as pretty-printed JSON in a single file.
///
/// Every write to the file, including the create-if-absent one done by
/// `load`, holds `file_lock`, so an initializing read cannot clobber a save
/// and writers never share the temp file at the same time.
pub struct JsonFileStore {
    path: PathBuf,
    file_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), file_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> std::io::Result<Vec<u8>> {
        fs::read(&self.path).await
    }

    async fn write(&self, document: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(document)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &body).await?;
        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn load(&self) -> Result<Document, StoreError> {
        match self.read().await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let _guard = self.file_lock.lock().await;
                // A save may have landed while we waited.
                match self.read().await {
                    Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        info!("No document at {}, creating an empty one", self.path.display());
                        let document = Document::default();
                        self.write(&document).await?;
                        Ok(document)
                    }
                    Err(err) => Err(err.into()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, document: &Document) -> Result<(), StoreError> {
        let _guard = self.file_lock.lock().await;
        self.write(document).await?;
        debug!(
            "Saved {} shops and {} employees to {}",
            document.shops.len(),
            document.employees.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Employee;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_creates_missing_file_with_empty_collections() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("db.json"));

        let document = store.load().await.unwrap();
        assert_eq!(document, Document::default());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "shops": [], "employees": [] }));
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("db.json"));

        let mut document = Document::default();
        document.employees.push(Employee {
            id: "emp_1".into(),
            first_name: "Sam".into(),
            last_name: "Lee".into(),
            role: String::new(),
            email: "sam@example.com".into(),
            shop_id: None,
            extra: Default::default(),
        });
        store.save(&document).await.unwrap();

        let reopened = JsonFileStore::new(dir.path().join("db.json"));
        assert_eq!(reopened.load().await.unwrap(), document);
        assert!(!dir.path().join("db.json.tmp").exists());
    }

    #[tokio::test]
    async fn initializing_load_never_overwrites_a_concurrent_save() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("db.json"));

        let mut document = Document::default();
        document.employees.push(Employee {
            id: "emp_1".into(),
            first_name: "Sam".into(),
            last_name: "Lee".into(),
            role: String::new(),
            email: String::new(),
            shop_id: None,
            extra: Default::default(),
        });

        for _ in 0..20 {
            let _ = std::fs::remove_file(store.path());
            let (loaded, saved) = tokio::join!(store.load(), store.save(&document));
            loaded.unwrap();
            saved.unwrap();
            assert_eq!(store.load().await.unwrap(), document);
        }
    }

    #[tokio::test]
    async fn concurrent_first_loads_all_succeed() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("db.json"));

        let (a, b, c, d) = tokio::join!(store.load(), store.load(), store.load(), store.load());
        for loaded in [a, b, c, d] {
            assert_eq!(loaded.unwrap(), Document::default());
        }
    }

    #[tokio::test]
    async fn corrupt_content_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[tokio::test]
    async fn unwritable_location_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let store = JsonFileStore::new(blocker.join("db.json"));
        assert!(matches!(store.load().await, Err(StoreError::Io(_))));
    }
}
