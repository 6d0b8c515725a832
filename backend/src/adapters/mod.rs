//! Adapters - Implementations of port interfaces and outer surfaces.
//!
//! ## Storage Adapters
//!
//! - `FileHistoryStore` - One file per key on the local filesystem
//! - `InMemoryHistoryStore` - Process-local map for tests and ephemeral sessions
//!
//! ## Terminal
//!
//! - `TerminalShell` - Interactive wizard driven by line commands

pub mod storage;
pub mod terminal;

pub use storage::{FileHistoryStore, InMemoryHistoryStore};
pub use terminal::TerminalShell;
