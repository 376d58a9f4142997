//! Parsed message bodies and derived notices.

use crate::GroupId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical column layout of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub group_id: GroupId,
    pub group_columns: Vec<String>,
}

impl GroupRecord {
    #[must_use]
    pub fn new<I, S>(group_id: impl Into<GroupId>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group_id: group_id.into(),
            group_columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of columns in the group layout.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.group_columns.len()
    }
}

/// A user's configured column layout for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsRecord {
    pub group_id: GroupId,
    pub setting_columns: Vec<String>,
}

impl UserSettingsRecord {
    #[must_use]
    pub fn new<I, S>(group_id: impl Into<GroupId>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group_id: group_id.into(),
            setting_columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of columns the user expects.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.setting_columns.len()
    }
}

/// Human-readable notice that a group and its settings disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncNotice(String);

impl SyncNotice {
    /// Builds the `"<id> is not synced"` notice for a group.
    #[must_use]
    pub fn not_synced(group_id: &GroupId) -> Self {
        Self(format!("{group_id} is not synced"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SyncNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for SyncNotice {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SyncNotice {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
