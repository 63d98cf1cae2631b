//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses entity and patch definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod mailer;
pub mod runtime;
pub mod services;
pub mod storage;
#[cfg(test)]
pub mod test_support;
