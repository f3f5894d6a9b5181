//! Service layer for the person API.
//! - `storage` holds the lock-guarded in-memory map every store is built on.
//! - `person` holds the record store, its trait seam, and the CSV import driver.
//! - Validation rules live in the `models` crate; the store never applies them.

pub mod errors;
pub mod storage;
pub mod person;
