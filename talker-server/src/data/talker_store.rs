use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::domain::error::DomainError;
use crate::domain::talker::Talker;

/// Whole-document persistence for the talker collection.
///
/// Callers always read the full list, change it, and write it back.
#[async_trait]
pub trait TalkerStore: Send + Sync {
    async fn read_all(&self) -> Result<Vec<Talker>, DomainError>;
    async fn write_all(&self, talkers: &[Talker]) -> Result<(), DomainError>;
}

/// A JSON array of talkers kept in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    allow_missing: bool,
}

impl JsonFileStore {
    /// A missing file reads as an empty collection; the first write creates it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            allow_missing: true,
        }
    }

    /// A missing file is an error. Used for the seed, which must never be
    /// mistaken for an empty collection.
    pub fn existing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            allow_missing: false,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl TalkerStore for JsonFileStore {
    async fn read_all(&self) -> Result<Vec<Talker>, DomainError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound && self.allow_missing => {
                warn!(path = %self.path.display(), "data file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                error!(path = %self.path.display(), "failed to read data file: {}", e);
                return Err(DomainError::Internal(format!(
                    "read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            error!(path = %self.path.display(), "data file is not a talker list: {}", e);
            DomainError::Internal(format!("parse {}: {}", self.path.display(), e))
        })
    }

    async fn write_all(&self, talkers: &[Talker]) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(talkers)
            .map_err(|e| DomainError::Internal(format!("serialize talkers: {}", e)))?;

        // readers never see a half-written file: write aside, then swap in
        let temp = self.temp_path();
        fs::write(&temp, json).await.map_err(|e| {
            error!(path = %temp.display(), "failed to write data file: {}", e);
            DomainError::Internal(format!("write {}: {}", temp.display(), e))
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            error!(path = %self.path.display(), "failed to replace data file: {}", e);
            DomainError::Internal(format!("rename {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), count = talkers.len(), "data file written");
        Ok(())
    }
}

/// Keeps the collection in memory; clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    talkers: Arc<RwLock<Vec<Talker>>>,
}

impl InMemoryStore {
    pub fn new(talkers: Vec<Talker>) -> Self {
        Self {
            talkers: Arc::new(RwLock::new(talkers)),
        }
    }
}

#[async_trait]
impl TalkerStore for InMemoryStore {
    async fn read_all(&self) -> Result<Vec<Talker>, DomainError> {
        Ok(self.talkers.read().await.clone())
    }

    async fn write_all(&self, talkers: &[Talker]) -> Result<(), DomainError> {
        *self.talkers.write().await = talkers.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::talker::Talk;

    fn talker(id: u64, name: &str) -> Talker {
        Talker {
            id,
            name: name.to_string(),
            age: 30,
            talk: Talk {
                watched_at: "01/01/2020".to_string(),
                rate: 4,
            },
        }
    }

    #[tokio::test]
    async fn file_store_round_trips_the_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("talker.json"));
        let talkers = vec![talker(1, "Henrique Albuquerque"), talker(2, "Heloísa Albuquerque")];

        store.write_all(&talkers).await.unwrap();

        assert_eq!(store.read_all().await.unwrap(), talkers);
    }

    #[tokio::test]
    async fn file_store_reads_the_camel_case_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talker.json");
        std::fs::write(
            &path,
            r#"[{"name":"Ricardo Xavier Filho","age":33,"id":3,"talk":{"watchedAt":"23/10/2020","rate":5}}]"#,
        )
        .unwrap();

        let talkers = JsonFileStore::new(&path).read_all().await.unwrap();

        assert_eq!(talkers.len(), 1);
        assert_eq!(talkers[0].id, 3);
        assert_eq!(talkers[0].talk.watched_at, "23/10/2020");
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn existing_store_rejects_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::existing(dir.path().join("typo-seed.json"));

        let err = store.read_all().await.unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn write_replaces_the_file_without_leaving_a_temp_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talker.json");
        let store = JsonFileStore::new(&path);

        store.write_all(&[talker(1, "Ana Paula")]).await.unwrap();
        store.write_all(&[talker(2, "Bruno Lima")]).await.unwrap();

        assert_eq!(store.read_all().await.unwrap(), vec![talker(2, "Bruno Lima")]);
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("talker.json")]);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talker.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).read_all().await.unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn memory_store_clones_share_state() {
        let store = InMemoryStore::default();
        let other = store.clone();

        store.write_all(&[talker(7, "Marcos Costa")]).await.unwrap();

        assert_eq!(other.read_all().await.unwrap()[0].id, 7);
    }
}
