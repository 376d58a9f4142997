//! Dispatcher loop.
//!
//! Commands are pushed onto one channel and processed strictly in arrival
//! order by a single task, so each message's parse, merge and sync check
//! finish before the next message is looked at.

use crate::config::WorkflowConfig;
use crate::engine::WorkflowEngine;
use crate::error::{WorkflowError, WorkflowResult};
use crate::events::WorkflowEvent;
use crate::listening::ListeningSet;
use crate::state::WorkflowState;
use colsync_types::IncomingMessage;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Commands accepted by the dispatcher.
#[derive(Debug, Clone)]
pub enum WorkflowCommand {
    /// A broadcast message arrived.
    MessageReceived(IncomingMessage),
    /// Replace the listening set.
    SetListening(Vec<String>),
    /// Add one tag to the listening set.
    Listen(String),
    /// Remove one tag from the listening set.
    Unlisten(String),
    /// Stop the loop.
    Shutdown,
}

/// Cloneable handle for feeding the dispatcher and observing its events.
#[derive(Clone)]
pub struct OrchestratorHandle {
    commands: mpsc::Sender<WorkflowCommand>,
    engine: WorkflowEngine,
}

impl OrchestratorHandle {
    /// Queues a received message.
    pub async fn send_message(&self, message: IncomingMessage) -> WorkflowResult<()> {
        self.send(WorkflowCommand::MessageReceived(message)).await
    }

    /// Queues a listening-set replacement.
    pub async fn set_listening<I, S>(&self, tags: I) -> WorkflowResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags.into_iter().map(Into::into).collect();
        self.send(WorkflowCommand::SetListening(tags)).await
    }

    pub async fn listen(&self, tag: impl Into<String>) -> WorkflowResult<()> {
        self.send(WorkflowCommand::Listen(tag.into())).await
    }

    pub async fn unlisten(&self, tag: impl Into<String>) -> WorkflowResult<()> {
        self.send(WorkflowCommand::Unlisten(tag.into())).await
    }

    /// Asks the loop to stop after the commands already queued.
    pub async fn shutdown(&self) -> WorkflowResult<()> {
        self.send(WorkflowCommand::Shutdown).await
    }

    /// Subscribes to workflow events.
    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowEvent> {
        self.engine.subscribe()
    }

    /// Returns a copy of the state tables as of now.
    pub async fn snapshot(&self) -> WorkflowState {
        self.engine.snapshot().await
    }

    /// Returns the listening set as of now.
    pub async fn listening(&self) -> ListeningSet {
        self.engine.listening().await
    }

    async fn send(&self, command: WorkflowCommand) -> WorkflowResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| WorkflowError::ChannelClosed)
    }
}

/// Owns the engine and drains the command channel.
pub struct WorkflowOrchestrator {
    engine: WorkflowEngine,
    commands: mpsc::Receiver<WorkflowCommand>,
}

/// Builds a dispatcher and its handle from a config.
pub fn create_orchestrator(
    config: WorkflowConfig,
) -> WorkflowResult<(OrchestratorHandle, WorkflowOrchestrator)> {
    config.validate()?;
    let engine = WorkflowEngine::new(&config);
    Ok(create_orchestrator_with_engine(engine, config.command_capacity))
}

/// Builds a dispatcher around an existing engine.
pub fn create_orchestrator_with_engine(
    engine: WorkflowEngine,
    command_capacity: usize,
) -> (OrchestratorHandle, WorkflowOrchestrator) {
    let (tx, rx) = mpsc::channel(command_capacity.max(1));
    let handle = OrchestratorHandle {
        commands: tx,
        engine: engine.clone(),
    };
    let orchestrator = WorkflowOrchestrator {
        engine,
        commands: rx,
    };
    (handle, orchestrator)
}

impl WorkflowOrchestrator {
    /// Returns the engine driven by this loop.
    pub fn engine(&self) -> &WorkflowEngine {
        &self.engine
    }

    /// Processes commands until `Shutdown` or until every handle is dropped.
    pub async fn run(mut self) {
        info!("Workflow dispatcher started");

        while let Some(command) = self.commands.recv().await {
            match command {
                WorkflowCommand::MessageReceived(message) => {
                    if let Err(e) = self.engine.handle_message(message).await {
                        warn!("Message discarded: {}", e);
                    }
                }
                WorkflowCommand::SetListening(tags) => {
                    debug!("Listening set replaced: {:?}", tags);
                    self.engine.set_listening(tags).await;
                }
                WorkflowCommand::Listen(tag) => {
                    debug!("Listening to {:?}", tag);
                    self.engine.listen(tag).await;
                }
                WorkflowCommand::Unlisten(tag) => {
                    debug!("No longer listening to {:?}", tag);
                    self.engine.unlisten(&tag).await;
                }
                WorkflowCommand::Shutdown => break,
            }
        }

        info!("Workflow dispatcher stopped");
    }
}
