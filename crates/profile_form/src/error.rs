//! Profile form error types.

use thiserror::Error;

/// Errors that can occur while loading or submitting a profile form.
#[derive(Debug, Error)]
pub enum FormError {
    /// No user is signed in.
    #[error("Not signed in")]
    NotAuthenticated,

    /// No profile exists for the current user.
    #[error("No handyman profile found")]
    NotFound,

    /// Required fields are missing from the draft.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A numeric field could not be coerced.
    #[error("Invalid {field} value: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },

    /// The draft has no persisted counterpart to update.
    #[error("Profile has not been created yet")]
    NotPersisted,

    /// Another load or submit is still in flight on this controller.
    #[error("Another operation is in progress")]
    Busy,

    /// Authentication collaborator failure.
    #[error(transparent)]
    Auth(#[from] auth::AuthError),

    /// Persistence collaborator failure.
    #[error(transparent)]
    Store(#[from] profile_store::StoreError),

    /// A host-supplied save handler rejected the draft.
    #[error("{0}")]
    Hook(String),
}

impl FormError {
    /// The short message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            FormError::NotAuthenticated => "Please log in to manage your profile".to_string(),
            FormError::NotFound => "No handyman profile found".to_string(),
            FormError::MissingFields(_) => "Please fill in all required fields".to_string(),
            FormError::InvalidNumber { field, .. } => format!("Please enter a valid {field}"),
            FormError::Busy => "Another operation is in progress".to_string(),
            FormError::Hook(message) => message.clone(),
            _ => "Error saving your profile. Please try again.".to_string(),
        }
    }
}

/// Result type for profile form operations.
pub type FormResult<T> = Result<T, FormError>;
