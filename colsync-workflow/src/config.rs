//! Workflow configuration.

use crate::error::{WorkflowError, WorkflowResult};
use serde::{Deserialize, Serialize};

/// Default capacity of the outbound event channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Default capacity of the dispatcher's command channel.
pub const DEFAULT_COMMAND_CAPACITY: usize = 64;

/// Configuration for the workflow engine and its dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Message-type tags accepted at startup.
    pub listening: Vec<String>,
    /// Buffered events per subscriber before slow receivers lag.
    pub event_capacity: usize,
    /// Buffered commands before senders wait.
    pub command_capacity: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            listening: Vec::new(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            command_capacity: DEFAULT_COMMAND_CAPACITY,
        }
    }
}

impl WorkflowConfig {
    /// Loads a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> WorkflowResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WorkflowError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the initial listening set.
    pub fn with_listening<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listening = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Rejects zero channel capacities, which tokio would panic on.
    pub fn validate(&self) -> WorkflowResult<()> {
        if self.event_capacity == 0 {
            return Err(WorkflowError::Config("event_capacity must be > 0".into()));
        }
        if self.command_capacity == 0 {
            return Err(WorkflowError::Config("command_capacity must be > 0".into()));
        }
        Ok(())
    }
}
