//! Current-user identity type.

use serde::{Deserialize, Serialize};

/// The identity of the currently signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User ID.
    pub id: String,

    /// Email address.
    pub email: String,
}

impl CurrentUser {
    /// Creates a new current-user identity.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}
