//! Type-specific message body parsers.
//!
//! Parsing is a plain JSON decode into the record the kind expects. No
//! structural validation happens beyond what the decode enforces.

use crate::error::{WorkflowError, WorkflowResult};
use colsync_types::{GroupRecord, IncomingMessage, MessageKind, UserSettingsRecord};
use serde::de::DeserializeOwned;

/// A parsed message body, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecord {
    Group(GroupRecord),
    Settings(UserSettingsRecord),
}

impl ParsedRecord {
    pub fn kind(&self) -> MessageKind {
        match self {
            ParsedRecord::Group(_) => MessageKind::Usual,
            ParsedRecord::Settings(_) => MessageKind::Settings,
        }
    }
}

/// Parses a `usual` message body.
pub fn parse_group(message: &IncomingMessage) -> WorkflowResult<GroupRecord> {
    decode(MessageKind::Usual, &message.data)
}

/// Parses a `settings` message body.
pub fn parse_settings(message: &IncomingMessage) -> WorkflowResult<UserSettingsRecord> {
    decode(MessageKind::Settings, &message.data)
}

/// Parses a message body with the parser for `kind`.
pub fn parse(kind: MessageKind, message: &IncomingMessage) -> WorkflowResult<ParsedRecord> {
    match kind {
        MessageKind::Usual => parse_group(message).map(ParsedRecord::Group),
        MessageKind::Settings => parse_settings(message).map(ParsedRecord::Settings),
    }
}

fn decode<T: DeserializeOwned>(kind: MessageKind, data: &str) -> WorkflowResult<T> {
    serde_json::from_str(data).map_err(|source| WorkflowError::Parse { kind, source })
}
