//! Application layer - Session control and history persistence.
//!
//! This layer orchestrates domain operations and coordinates with the
//! history store port. The interactive shell talks only to
//! [`DecisionSession`].

mod history_codec;
mod history_repository;
mod session;

pub use history_codec::{CodecError, HistoryCodec};
pub use history_repository::{HistoryRepository, PersistenceError, DEFAULT_HISTORY_KEY};
pub use session::{
    DecisionSession, DetailAdvance, FinalizeOutcome, ItemKind, SessionConfig, SessionError,
};
