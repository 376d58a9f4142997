//! Inbound broadcast messages.
//!
//! A message carries a type tag and a JSON-encoded body. The tag is kept as a
//! raw string so tags outside the known set survive deserialization and can be
//! reported by the dispatcher instead of failing at the boundary.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of message kinds the router knows how to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Group layout update; body is a `GroupRecord`.
    Usual,
    /// User settings update; body is a `UserSettingsRecord`.
    Settings,
}

impl MessageKind {
    /// Every known kind, in routing order.
    pub const ALL: [MessageKind; 2] = [MessageKind::Usual, MessageKind::Settings];

    /// Returns the wire tag for this kind.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            MessageKind::Usual => "usual",
            MessageKind::Settings => "settings",
        }
    }

    /// Looks up a kind by its wire tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "usual" => Some(MessageKind::Usual),
            "settings" => Some(MessageKind::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for MessageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::UnknownMessageKind(s.to_string()))
    }
}

/// A broadcast message as it arrives from the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Type tag, e.g. `"usual"` or `"settings"`.
    #[serde(rename = "type")]
    pub message_type: String,
    /// JSON-encoded body.
    pub data: String,
}

impl IncomingMessage {
    /// Creates a message with an arbitrary tag.
    #[must_use]
    pub fn new(message_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            message_type: message_type.into(),
            data: data.into(),
        }
    }

    /// Creates a message tagged with a known kind.
    #[must_use]
    pub fn of_kind(kind: MessageKind, data: impl Into<String>) -> Self {
        Self::new(kind.as_tag(), data)
    }

    /// Creates a `usual` message whose body is the serialized record.
    pub fn usual<T: Serialize>(body: &T) -> crate::Result<Self> {
        Ok(Self::of_kind(MessageKind::Usual, serde_json::to_string(body)?))
    }

    /// Creates a `settings` message whose body is the serialized record.
    pub fn settings<T: Serialize>(body: &T) -> crate::Result<Self> {
        Ok(Self::of_kind(MessageKind::Settings, serde_json::to_string(body)?))
    }

    /// Returns the known kind of this message, if its tag is recognised.
    #[must_use]
    pub fn kind(&self) -> Option<MessageKind> {
        MessageKind::from_tag(&self.message_type)
    }
}
