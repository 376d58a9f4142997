//! Error types for the workflow layer.

use colsync_types::MessageKind;
use thiserror::Error;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors that can occur while routing a message.
///
/// Dropped messages and groups still waiting for their counterpart are not
/// errors; they surface as [`crate::DispatchOutcome`] variants or are skipped.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The message body could not be decoded as the record its kind expects.
    #[error("failed to parse {kind} message: {source}")]
    Parse {
        kind: MessageKind,
        #[source]
        source: serde_json::Error,
    },

    /// The background parse task did not complete.
    #[error("parse task failed: {0}")]
    Task(String),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// The dispatcher loop is gone.
    #[error("channel closed")]
    ChannelClosed,
}

impl WorkflowError {
    /// Returns true for malformed message payloads.
    pub fn is_parse(&self) -> bool {
        matches!(self, WorkflowError::Parse { .. })
    }
}
