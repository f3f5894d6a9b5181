use async_trait::async_trait;
use models::person::Person;

/// Store operations the HTTP layer depends on.
///
/// Absence is reported through `Option`/`bool`, never as an error; none of
/// these operations can fail.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert `candidate` under a freshly generated id; any id it carries is ignored.
    async fn create(&self, candidate: Person) -> Person;
    async fn get_all(&self) -> Vec<Person>;
    async fn get(&self, id: &str) -> Option<Person>;
    /// Replace the record stored under `id`, keeping its id. `None` if absent.
    async fn update(&self, id: &str, replacement: Person) -> Option<Person>;
    async fn delete(&self, id: &str) -> bool;
    async fn len(&self) -> usize;
}
