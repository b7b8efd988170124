//! Reconciliation and reference checks between the store and the provider.

mod error;
mod guard;
mod reconcile;

pub use error::{service_error_to_status_code, ServiceError};
pub use guard::RelationshipGuard;
pub use reconcile::SaunaReconciler;
