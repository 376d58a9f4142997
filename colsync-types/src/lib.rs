//! Core type definitions for colsync.
//!
//! This crate defines the plain data shared by the routing layer:
//! - Group and message identifiers
//! - Inbound broadcast messages and their known kinds
//! - Parsed group and user-settings records
//! - Sync notices raised when the two disagree
//!
//! Routing, parsing and state live in `colsync-workflow`.

mod ids;
mod message;
mod record;

pub use ids::{GroupId, MessageId};
pub use message::{IncomingMessage, MessageKind};
pub use record::{GroupRecord, SyncNotice, UserSettingsRecord};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid group id: {0:?}")]
    InvalidGroupId(String),

    #[error("unknown message kind: {0}")]
    UnknownMessageKind(String),
}
