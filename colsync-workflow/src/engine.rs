//! Workflow engine - owns the state tables and runs the routing pipeline.
//!
//! One message flows through: classify against the listening set, parse on
//! the blocking pool, merge into the tables, announce the changed group, then
//! check that group for a column mismatch. The merge commits before the change
//! notification goes out, and the check reads the committed tables.

use crate::checker::check_state;
use crate::classifier::{classify, Classification};
use crate::config::WorkflowConfig;
use crate::error::{WorkflowError, WorkflowResult};
use crate::events::WorkflowEvent;
use crate::listening::ListeningSet;
use crate::merger::StateMerger;
use crate::parser::{parse, ParsedRecord};
use crate::state::{GroupsTable, SettingsTable, WorkflowState};
use colsync_types::{
    GroupId, GroupRecord, IncomingMessage, MessageId, MessageKind, SyncNotice, UserSettingsRecord,
};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

/// What happened to a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The message type is not being listened to. Nothing changed.
    Dropped,
    /// The message type is listened to but has no parser. Nothing changed.
    Unroutable { tag: String },
    /// The message was parsed and merged.
    Applied {
        message_id: MessageId,
        kind: MessageKind,
        group_id: GroupId,
        /// Notices raised by the follow-up sync check; empty when in sync.
        notices: Vec<SyncNotice>,
    },
}

impl DispatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, DispatchOutcome::Applied { .. })
    }
}

/// The routing engine. Cheap to clone; clones share state and subscribers.
#[derive(Clone)]
pub struct WorkflowEngine {
    /// Groups and settings tables. Written only through `merger`.
    state: Arc<RwLock<WorkflowState>>,
    /// Tags currently accepted.
    listening: Arc<RwLock<ListeningSet>>,
    merger: StateMerger,
    events: broadcast::Sender<WorkflowEvent>,
}

impl Default for WorkflowEngine {
    fn default() -> Self {
        Self::new(&WorkflowConfig::default())
    }
}

impl WorkflowEngine {
    /// Creates an engine with the config's initial listening set.
    pub fn new(config: &WorkflowConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            state: Arc::new(RwLock::new(WorkflowState::new())),
            listening: Arc::new(RwLock::new(config.listening.iter().cloned().collect())),
            merger: StateMerger::new(),
            events,
        }
    }

    /// Subscribes to engine events.
    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowEvent> {
        self.events.subscribe()
    }

    // ── Pipeline ─────────────────────────────────────────────────

    /// Routes one incoming message through the full pipeline.
    ///
    /// A parse failure is returned as an error and leaves the tables untouched.
    pub async fn handle_message(&self, message: IncomingMessage) -> WorkflowResult<DispatchOutcome> {
        let message_id = MessageId::new();

        let classification = {
            let listening = self.listening.read().await;
            classify(&message, &listening)
        };

        let kind = match classification {
            Classification::Dropped => {
                debug!("Dropping message {} of type {:?}", message_id, message.message_type);
                return Ok(DispatchOutcome::Dropped);
            }
            Classification::Unroutable(tag) => {
                warn!("No parser for listened message type {:?} ({})", tag, message_id);
                return Ok(DispatchOutcome::Unroutable { tag });
            }
            Classification::Route(kind) => kind,
        };

        let record = match self.parse_effect(kind, message).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to handle message {}: {}", message_id, e);
                return Err(e);
            }
        };

        let changed = {
            let mut state = self.state.write().await;
            self.merger.merge(&mut state, record)
        };
        let group_id = changed.first().cloned().ok_or_else(|| {
            WorkflowError::Task(format!("merge of {message_id} reported no group"))
        })?;
        debug!("Applied {} message {} for group {}", kind, message_id, group_id);

        let notices = self.groups_redraw_required(changed).await;

        Ok(DispatchOutcome::Applied {
            message_id,
            kind,
            group_id,
            notices,
        })
    }

    /// Announces changed groups and checks them for column mismatches.
    ///
    /// Emits `GroupsRedrawRequired`, then `ColumnListChanged` only if at least
    /// one group is out of sync. Returns the notices that were emitted.
    pub async fn groups_redraw_required(&self, changed: Vec<GroupId>) -> Vec<SyncNotice> {
        let notices = {
            let state = self.state.read().await;
            check_state(&changed, &state)
        };

        self.emit(WorkflowEvent::GroupsRedrawRequired(changed));

        if !notices.is_empty() {
            info!("{} group(s) out of sync", notices.len());
            self.emit(WorkflowEvent::ColumnListChanged(notices.clone()));
        }

        notices
    }

    async fn parse_effect(
        &self,
        kind: MessageKind,
        message: IncomingMessage,
    ) -> WorkflowResult<ParsedRecord> {
        tokio::task::spawn_blocking(move || parse(kind, &message))
            .await
            .map_err(|e| WorkflowError::Task(e.to_string()))?
    }

    fn emit(&self, event: WorkflowEvent) {
        if self.events.send(event).is_err() {
            debug!("No subscribers for workflow event");
        }
    }

    // ── Listening set ────────────────────────────────────────────

    /// Starts accepting messages tagged `tag`.
    pub async fn listen(&self, tag: impl Into<String>) -> bool {
        self.listening.write().await.listen(tag)
    }

    /// Stops accepting messages tagged `tag`.
    pub async fn unlisten(&self, tag: &str) -> bool {
        self.listening.write().await.unlisten(tag)
    }

    /// Replaces the listening set.
    pub async fn set_listening<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listening.write().await.replace(tags);
    }

    /// Returns a snapshot of the listening set.
    pub async fn listening(&self) -> ListeningSet {
        self.listening.read().await.clone()
    }

    // ── Read snapshots ───────────────────────────────────────────

    pub async fn group(&self, group_id: &str) -> Option<GroupRecord> {
        self.state.read().await.group(group_id).cloned()
    }

    pub async fn settings(&self, group_id: &str) -> Option<UserSettingsRecord> {
        self.state.read().await.settings(group_id).cloned()
    }

    pub async fn groups_snapshot(&self) -> GroupsTable {
        self.state.read().await.groups().clone()
    }

    pub async fn settings_snapshot(&self) -> SettingsTable {
        self.state.read().await.user_settings().clone()
    }

    /// Returns a copy of both tables.
    pub async fn snapshot(&self) -> WorkflowState {
        self.state.read().await.clone()
    }
}
