//! TSRM - Terminal Student Records Library
//!
//! A terminal-based student record manager backed by SQLite, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
