// stepflow-domain library entry point
pub mod contribution;
pub mod error;
pub mod expense;
pub mod payment_method;
pub mod profile;
pub mod reference;

pub use contribution::{ContributionDetails, Interval};
pub use error::DomainError;
pub use expense::{ExpenseForm, ExpenseItem, PayoutMethod};
pub use payment_method::{PaymentInstrument, PaymentMethodType, MIN_USABLE_BALANCE};
pub use profile::{ContributorProfile, ProfileType};
pub use reference::ReferenceSnapshot;
