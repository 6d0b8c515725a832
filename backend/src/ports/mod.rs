//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `HistoryStore` - Key-value byte store holding the serialized decision history

mod history_store;

pub use history_store::{validate_key, HistoryStore, StoreError};
