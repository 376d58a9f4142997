//! Sync checker.
//!
//! Compares the column count of each changed group against the user's settings
//! for that group. Only the ids in the changed batch are checked, never the
//! whole table. Column names and order are not compared.

use crate::state::{GroupsTable, SettingsTable, WorkflowState};
use colsync_types::{GroupId, SyncNotice};

/// Returns one notice per changed id whose group and settings disagree on
/// column count, in batch order.
///
/// Ids missing either record are skipped: the counterpart message has not
/// arrived yet. Duplicate ids produce duplicate notices.
pub fn check_sync(
    changed: &[GroupId],
    groups: &GroupsTable,
    settings: &SettingsTable,
) -> Vec<SyncNotice> {
    changed
        .iter()
        .filter(|id| match (groups.get(*id), settings.get(*id)) {
            (Some(group), Some(user)) => group.column_count() != user.column_count(),
            _ => false,
        })
        .map(SyncNotice::not_synced)
        .collect()
}

/// [`check_sync`] against both tables of a state.
pub fn check_state(changed: &[GroupId], state: &WorkflowState) -> Vec<SyncNotice> {
    check_sync(changed, state.groups(), state.user_settings())
}
