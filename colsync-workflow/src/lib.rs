//! Message routing and column sync detection for colsync.
//!
//! Broadcast messages arrive tagged with a type. Messages whose type is in the
//! listening set are parsed into a group layout or a user-settings record and
//! merged into in-memory tables keyed by group id. After each merge the
//! changed group is checked, and a "column list changed" event is raised when
//! the group and the user's settings disagree on the number of columns.
//!
//! ## Components
//!
//! - **Classifier**: filters by listening set and picks the parser
//! - **Parser**: decodes the JSON body into a typed record
//! - **Merger**: overwrites the record in its table, reports the changed id
//! - **Checker**: compares column counts for the changed ids
//! - **Engine**: runs the pipeline and publishes events
//! - **Orchestrator**: command channel and single dispatcher loop
//!
//! # Example
//!
//! ```
//! use colsync_workflow::{WorkflowConfig, WorkflowEngine};
//!
//! let config = WorkflowConfig::default().with_listening(["usual", "settings"]);
//! let engine = WorkflowEngine::new(&config);
//! let _events = engine.subscribe();
//! ```

pub mod checker;
pub mod classifier;
mod config;
mod engine;
mod error;
pub mod events;
pub mod listening;
pub mod merger;
mod orchestrator;
pub mod parser;
pub mod state;

pub use checker::{check_state, check_sync};
pub use classifier::{classify, Classification};
pub use config::{WorkflowConfig, DEFAULT_COMMAND_CAPACITY, DEFAULT_EVENT_CAPACITY};
pub use engine::{DispatchOutcome, WorkflowEngine};
pub use error::{WorkflowError, WorkflowResult};
pub use events::WorkflowEvent;
pub use listening::ListeningSet;
pub use merger::StateMerger;
pub use orchestrator::{
    create_orchestrator, create_orchestrator_with_engine, OrchestratorHandle, WorkflowCommand,
    WorkflowOrchestrator,
};
pub use parser::{parse, parse_group, parse_settings, ParsedRecord};
pub use state::{GroupsTable, SettingsTable, WorkflowState};
