use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::data::talker_store::TalkerStore;
use crate::domain::{
    error::DomainError,
    talker::{NewTalker, Talker},
};

#[derive(Clone)]
pub struct TalkerService {
    store: Arc<dyn TalkerStore>,
    seed: Option<Arc<dyn TalkerStore>>,
    // held across every read-modify-write so concurrent writers cannot lose updates
    write_lock: Arc<Mutex<()>>,
}

impl TalkerService {
    pub fn new(store: Arc<dyn TalkerStore>) -> Self {
        Self {
            store,
            seed: None,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Source that [`TalkerService::restore_seed`] copies back over the store.
    pub fn with_seed(mut self, seed: Arc<dyn TalkerStore>) -> Self {
        self.seed = Some(seed);
        self
    }

    pub async fn list(&self) -> Result<Vec<Talker>, DomainError> {
        self.store.read_all().await
    }

    pub async fn get(&self, id: u64) -> Result<Talker, DomainError> {
        self.store
            .read_all()
            .await?
            .into_iter()
            .find(|talker| talker.id == id)
            .ok_or_else(|| DomainError::TalkerNotFound(id.to_string()))
    }

    /// Case-sensitive substring match on the name. No query returns everyone.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Talker>, DomainError> {
        let talkers = self.store.read_all().await?;
        Ok(match query.filter(|q| !q.is_empty()) {
            Some(q) => talkers
                .into_iter()
                .filter(|talker| talker.name.contains(q))
                .collect(),
            None => talkers,
        })
    }

    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: NewTalker) -> Result<Talker, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut talkers = self.store.read_all().await?;

        let id = match talkers.iter().map(|t| t.id).max() {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| DomainError::Internal(format!("no id left after {}", max)))?,
        };
        let talker = Talker::new(id, fields);
        talkers.push(talker.clone());
        self.store.write_all(&talkers).await?;

        info!(talker_id = id, "talker created");
        Ok(talker)
    }

    /// Replaces every field of the talker with `id`. An unknown id leaves the
    /// store untouched and yields `None`.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: u64, fields: NewTalker) -> Result<Option<Talker>, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut talkers = self.store.read_all().await?;

        let Some(talker) = talkers.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        talker.apply(fields);
        let updated = talker.clone();
        self.store.write_all(&talkers).await?;

        info!(talker_id = id, "talker updated");
        Ok(Some(updated))
    }

    /// Drops every talker with `id` and returns how many went away.
    /// The collection is rewritten even when nothing matched.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut talkers = self.store.read_all().await?;

        let before = talkers.len();
        talkers.retain(|t| t.id != id);
        let removed = before - talkers.len();
        self.store.write_all(&talkers).await?;

        info!(talker_id = id, removed, "talker delete processed");
        Ok(removed)
    }

    /// Overwrites the store with the seed collection, if a seed is configured.
    #[instrument(skip(self))]
    pub async fn restore_seed(&self) -> Result<Option<usize>, DomainError> {
        let Some(seed) = &self.seed else {
            return Ok(None);
        };
        let _guard = self.write_lock.lock().await;

        let talkers = seed.read_all().await?;
        self.store.write_all(&talkers).await?;

        info!(count = talkers.len(), "talkers restored from seed");
        Ok(Some(talkers.len()))
    }
}
