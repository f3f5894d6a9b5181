//! Storage abstractions for service layer
//!
//! Contains the reusable lock-guarded map that record stores wrap, so the
//! copy-out discipline is written once.

pub mod memory_map_store;
