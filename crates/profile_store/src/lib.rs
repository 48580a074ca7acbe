//! Handyman profile storage for HandyHub
//!
//! This crate provides the storage abstraction the profile core talks to:
//! a narrow trait for looking up, inserting and partially updating profile
//! documents, plus an in-memory implementation used by tests and
//! single-process deployments.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
