//! Core entity definitions for HandyHub.
//!
//! This crate defines the persisted data shapes shared across the HandyHub
//! marketplace: handyman profile documents, the partial-update payload, and
//! the specialty and availability vocabularies.

mod availability;
mod profile;
mod specialty;

pub use availability::*;
pub use profile::*;
pub use specialty::*;
