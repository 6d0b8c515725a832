//! JSON encoding of the decision history.
//!
//! Wire format: a JSON array of decisions, most recent first, using
//! camelCase keys and epoch-millisecond timestamps. Scores are derived and
//! never written.

use thiserror::Error;

use crate::domain::decision::DecisionHistory;

/// Errors raised while encoding or decoding history bytes.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to serialize history: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to deserialize history: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Encodes and decodes [`DecisionHistory`] values.
pub struct HistoryCodec;

impl HistoryCodec {
    pub fn encode(history: &DecisionHistory) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(history).map_err(CodecError::Serialize)
    }

    pub fn decode(bytes: &[u8]) -> Result<DecisionHistory, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::Deserialize)
    }
}
