//! Infrastructure layer providing external service integrations.
//!
//! This module contains the SQLite-backed persistence for student records.

pub mod persistence;

pub use persistence::*;
