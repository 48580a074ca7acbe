//! Authentication collaborator seam for HandyHub.
//!
//! The profile core consumes authentication as a read-only current-user
//! lookup. This crate defines that seam ([`AuthProvider`]) together with the
//! identity type it yields and an in-process implementation for tests and
//! single-user deployments.

mod error;
mod provider;
mod user;

pub use error::*;
pub use provider::*;
pub use user::*;
