//! stepflow-core: motor de workflows de envío por pasos.
pub mod constants;
pub mod draft;
pub mod engine;
pub mod errors;
pub mod event;
pub mod external;
pub mod hashing;
pub mod model;
pub mod repo;
pub mod resolver;
pub mod step;

pub use draft::{DraftStore, InMemoryDraftStore};
pub use engine::{EngineBuilder, WorkflowEngine, WorkflowState};
pub use errors::{ResolveError, TransportError, WorkflowError};
pub use event::{EventStore, InMemoryEventStore, WorkflowEvent, WorkflowEventKind};
pub use external::{Navigator, ReferenceProvider, SubmissionSink};
pub use model::{DraftKey, OptionEntry, OptionSet, StepValues};
pub use repo::{build_workflow_definition, InMemoryWorkflowRepository, WorkflowDefinition, WorkflowInstance,
               WorkflowRepository};
pub use resolver::OptionResolver;
pub use step::{StepDefinition, StepHint, TypedStep};
