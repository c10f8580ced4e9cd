mod types;

pub use types::{build_workflow_definition, InMemoryWorkflowRepository, WorkflowDefinition, WorkflowInstance,
                WorkflowRepository};
