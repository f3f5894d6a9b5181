use async_trait::async_trait;
use models::person::Person;
use tracing::debug;
use uuid::Uuid;

use crate::person::repository::PersonRepository;
use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory person store keyed by a generated UUID string.
///
/// Built once at startup and shared behind an `Arc`. Each operation takes the
/// map lock once, so concurrent requests observe some serial order of
/// operations. Records go in and come out as clones.
#[derive(Clone, Default)]
pub struct PersonStore {
    store: MemoryMapStore<String, Person>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, mut candidate: Person) -> Person {
        let created = self
            .store
            .update_map(|map| {
                // v4 collisions are not expected; the loop keeps ids unique regardless.
                let id = loop {
                    let id = Uuid::new_v4().to_string();
                    if !map.contains_key(&id) {
                        break id;
                    }
                };
                candidate.id = id.clone();
                map.insert(id, candidate.clone());
                candidate
            })
            .await;
        debug!(person_id = %created.id, "person created");
        created
    }

    pub async fn get_all(&self) -> Vec<Person> {
        self.store.values().await
    }

    pub async fn get(&self, id: &str) -> Option<Person> {
        self.store.get(&id.to_string()).await
    }

    pub async fn update(&self, id: &str, mut replacement: Person) -> Option<Person> {
        let updated = self
            .store
            .update_map(|map| {
                let existing = map.get_mut(id)?;
                replacement.id = existing.id.clone();
                *existing = replacement.clone();
                Some(replacement)
            })
            .await;
        debug!(person_id = %id, found = updated.is_some(), "person update");
        updated
    }

    pub async fn delete(&self, id: &str) -> bool {
        let existed = self.store.remove(&id.to_string()).await;
        debug!(person_id = %id, found = existed, "person delete");
        existed
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }
}

#[async_trait]
impl PersonRepository for PersonStore {
    async fn create(&self, candidate: Person) -> Person { self.create(candidate).await }
    async fn get_all(&self) -> Vec<Person> { self.get_all().await }
    async fn get(&self, id: &str) -> Option<Person> { self.get(id).await }
    async fn update(&self, id: &str, replacement: Person) -> Option<Person> { self.update(id, replacement).await }
    async fn delete(&self, id: &str) -> bool { self.delete(id).await }
    async fn len(&self) -> usize { self.len().await }
}
