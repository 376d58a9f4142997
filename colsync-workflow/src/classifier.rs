//! Message classification: filter by the listening set, then route by kind.

use crate::listening::ListeningSet;
use colsync_types::{IncomingMessage, MessageKind};

/// Where an incoming message should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The tag is not in the listening set; the message is ignored.
    Dropped,
    /// The tag is listened to but names no known kind.
    Unroutable(String),
    /// The message goes to the parser for this kind.
    Route(MessageKind),
}

/// Classifies a message against a snapshot of the listening set.
pub fn classify(message: &IncomingMessage, listening: &ListeningSet) -> Classification {
    if !listening.includes(&message.message_type) {
        return Classification::Dropped;
    }

    match message.kind() {
        Some(kind) => Classification::Route(kind),
        None => Classification::Unroutable(message.message_type.clone()),
    }
}
