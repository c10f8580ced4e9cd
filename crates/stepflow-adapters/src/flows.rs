//! Definiciones de workflow listas para usar.

use stepflow_core::{build_workflow_definition, StepDefinition, WorkflowDefinition, WorkflowError};

use crate::steps::{DetailsStep, ExpenseFormStep, ExpenseSummaryStep, PaymentStep, ProfileStep, SummaryStep};

/// Flujo de contribución: profile → details → payment → summary.
pub fn contribution_flow() -> Result<WorkflowDefinition, WorkflowError> {
    let steps: Vec<Box<dyn StepDefinition>> = vec![Box::new(ProfileStep),
                                                   Box::new(DetailsStep),
                                                   Box::new(PaymentStep::new()),
                                                   Box::new(SummaryStep)];
    build_workflow_definition("contribution", steps)
}

/// Flujo de gastos: form → summary.
pub fn expense_flow() -> Result<WorkflowDefinition, WorkflowError> {
    let steps: Vec<Box<dyn StepDefinition>> = vec![Box::new(ExpenseFormStep), Box::new(ExpenseSummaryStep)];
    build_workflow_definition("expense", steps)
}
