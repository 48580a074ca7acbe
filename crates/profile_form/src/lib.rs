//! Handyman profile state controller for HandyHub.
//!
//! Reconciles a remotely persisted profile document with a locally editable
//! draft across three operating modes (read-only view, editing an existing
//! profile, and first-time signup) and produces well-formed partial updates
//! back to storage.
//!
//! [`ProfileState`] owns the draft and the editing state machine;
//! [`ProfileController`] orchestrates it against the persistence and
//! authentication collaborators; [`SignupFlow`] is the save handler for
//! first-time profile creation.

mod controller;
mod draft;
mod error;
mod mode;
mod signup;
mod state;

pub use controller::*;
pub use draft::*;
pub use error::*;
pub use mode::*;
pub use signup::*;
pub use state::*;
