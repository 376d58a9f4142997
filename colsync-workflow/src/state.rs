//! In-memory state tables.
//!
//! Both tables are keyed by group id and only ever grow or overwrite. Writes
//! are crate-private so the merger stays the single writer; everything else
//! gets read access or cloned snapshots.

use colsync_types::{GroupId, GroupRecord, UserSettingsRecord};
use std::collections::HashMap;

/// Group layouts keyed by group id.
pub type GroupsTable = HashMap<GroupId, GroupRecord>;

/// User settings keyed by group id.
pub type SettingsTable = HashMap<GroupId, UserSettingsRecord>;

/// The two tables the sync checker compares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    groups: GroupsTable,
    settings: SettingsTable,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the group layout for an id.
    pub fn group(&self, group_id: &str) -> Option<&GroupRecord> {
        self.groups.get(group_id)
    }

    /// Gets the user settings for an id.
    pub fn settings(&self, group_id: &str) -> Option<&UserSettingsRecord> {
        self.settings.get(group_id)
    }

    pub fn groups(&self) -> &GroupsTable {
        &self.groups
    }

    pub fn user_settings(&self) -> &SettingsTable {
        &self.settings
    }

    /// Number of groups received so far.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of settings records received so far.
    pub fn settings_count(&self) -> usize {
        self.settings.len()
    }

    /// Stores a group record under its own id, replacing any previous one.
    pub(crate) fn put_group(&mut self, record: GroupRecord) -> Option<GroupRecord> {
        self.groups.insert(record.group_id.clone(), record)
    }

    /// Stores a settings record under its own id, replacing any previous one.
    pub(crate) fn put_settings(&mut self, record: UserSettingsRecord) -> Option<UserSettingsRecord> {
        self.settings.insert(record.group_id.clone(), record)
    }
}
