//! Storage Adapters
//!
//! Implementations of the `HistoryStore` port.
//!
//! ## Available Adapters
//!
//! - **FileHistoryStore** - Stores each key as a JSON file on disk
//! - **InMemoryHistoryStore** - Stores bytes in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use regret_minimizer::adapters::storage::{FileHistoryStore, InMemoryHistoryStore};
//!
//! // Production: file-based storage
//! let store = FileHistoryStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryHistoryStore::new();
//! ```

mod file_history_store;
mod in_memory_history_store;

pub use file_history_store::FileHistoryStore;
pub use in_memory_history_store::InMemoryHistoryStore;
