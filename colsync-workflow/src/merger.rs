//! State merger - folds parsed records into the state tables.
//!
//! Merging is whole-record overwrite keyed by group id: last write wins, no
//! field-level merge, no versioning. Each merge reports the single group id it
//! touched so the caller can raise a change notification.

use crate::parser::ParsedRecord;
use crate::state::WorkflowState;
use colsync_types::{GroupId, GroupRecord, UserSettingsRecord};
use tracing::debug;

/// Applies parsed records to a [`WorkflowState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StateMerger;

impl StateMerger {
    pub fn new() -> Self {
        Self
    }

    /// Sets `groups[record.group_id] = record`.
    /// Returns the changed-ids batch, always exactly `[record.group_id]`.
    pub fn merge_group(&self, state: &mut WorkflowState, record: GroupRecord) -> Vec<GroupId> {
        let group_id = record.group_id.clone();
        let replaced = state.put_group(record).is_some();
        debug!("Merged group {} (replaced={})", group_id, replaced);
        vec![group_id]
    }

    /// Sets `settings[record.group_id] = record`.
    /// Returns the changed-ids batch, always exactly `[record.group_id]`.
    pub fn merge_settings(
        &self,
        state: &mut WorkflowState,
        record: UserSettingsRecord,
    ) -> Vec<GroupId> {
        let group_id = record.group_id.clone();
        let replaced = state.put_settings(record).is_some();
        debug!("Merged settings for group {} (replaced={})", group_id, replaced);
        vec![group_id]
    }

    /// Dispatches to the merge for the record's kind.
    pub fn merge(&self, state: &mut WorkflowState, record: ParsedRecord) -> Vec<GroupId> {
        match record {
            ParsedRecord::Group(group) => self.merge_group(state, group),
            ParsedRecord::Settings(settings) => self.merge_settings(state, settings),
        }
    }
}
