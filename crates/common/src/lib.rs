//! Shared building blocks for the person API workspace: logging setup and
//! small response types reused by the server crate and the binary.

pub mod types;
pub mod utils;
