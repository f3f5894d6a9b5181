//! Person records: the store, the trait handlers depend on, and CSV import.

pub mod import;
pub mod repository;
pub mod store;

pub use repository::PersonRepository;
pub use store::PersonStore;
