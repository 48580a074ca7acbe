//! First-time signup save flow.

use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthProvider;
use profile_store::ProfileStore;
use uuid::Uuid;

use crate::{FormError, FormResult, ProfileDraft, SaveHandler};

/// Host callback invoked with the new record id after a successful signup,
/// typically to navigate to the profile page.
pub type SignupComplete = Box<dyn Fn(Uuid) + Send + Sync>;

/// Save handler that creates a brand-new profile for the current user.
///
/// Install on a signup-mode controller via
/// [`FormOptions::with_save_handler`](crate::FormOptions::with_save_handler).
pub struct SignupFlow {
    store: Arc<dyn ProfileStore>,
    auth: Arc<dyn AuthProvider>,
    on_complete: Option<SignupComplete>,
}

impl SignupFlow {
    /// Creates a signup flow against the given collaborators.
    pub fn new(store: Arc<dyn ProfileStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            store,
            auth,
            on_complete: None,
        }
    }

    /// Installs the completion callback.
    pub fn with_on_complete(mut self, on_complete: impl Fn(Uuid) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }
}

#[async_trait]
impl SaveHandler for SignupFlow {
    async fn save(&self, draft: &ProfileDraft) -> FormResult<()> {
        let user = self
            .auth
            .current_user()
            .await?
            .ok_or(FormError::NotAuthenticated)?;
        draft.require_complete()?;

        let record = draft.to_signup_record(&user)?;
        tracing::debug!(user_id = %user.id, record_id = %record.id, "creating handyman profile");
        let id = self.store.insert(record).await?;

        if let Some(on_complete) = &self.on_complete {
            on_complete(id);
        }
        Ok(())
    }
}
