//! Events published to subscribers.

use colsync_types::{GroupId, SyncNotice};
use serde::{Deserialize, Serialize};

/// An event emitted by the workflow engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum WorkflowEvent {
    /// A merge committed; these groups need to be redrawn and re-checked.
    GroupsRedrawRequired(Vec<GroupId>),
    /// One or more groups fell out of sync with their settings.
    /// Never emitted with an empty list.
    ColumnListChanged(Vec<SyncNotice>),
}

impl WorkflowEvent {
    /// Returns the notices if this is a `ColumnListChanged` event.
    pub fn notices(&self) -> Option<&[SyncNotice]> {
        match self {
            WorkflowEvent::ColumnListChanged(notices) => Some(notices),
            WorkflowEvent::GroupsRedrawRequired(_) => None,
        }
    }
}
