//! Inbound messages from the host process.
//!
//! The host forwards game events to the overlay as one JSON object per
//! message, tagged by `type`.

use serde::{Deserialize, Serialize};

use crate::position::Position;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("malformed client message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("client message is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// The tracked actor's nameplate moved on screen.
    NameplateChange { position: Position },
    /// The host asked for the nameplate to be shown or hidden.
    NameplateVisibility { shown: bool },
}

impl ClientMessage {
    /// Decode a single JSON message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Json`] for invalid JSON, unknown `type` tags,
    /// or payloads of the wrong shape.
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        Ok(serde_json::from_str(raw.trim())?)
    }

    /// Decode a single message from raw line bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Utf8`] for bytes that are not UTF-8, otherwise
    /// the same errors as [`ClientMessage::parse`].
    pub fn from_bytes(raw: &[u8]) -> Result<Self, MessageError> {
        Self::parse(std::str::from_utf8(raw)?)
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
