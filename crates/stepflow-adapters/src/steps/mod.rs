//! Pasos concretos de los flujos de contribución y gastos.

mod details;
mod expense;
mod payment;
mod profile;
mod summary;

pub use details::DetailsStep;
pub use expense::{ExpenseFormStep, ExpenseSummaryStep};
pub use payment::PaymentStep;
pub use profile::ProfileStep;
pub use summary::SummaryStep;
