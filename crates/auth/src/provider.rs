//! Current-user lookup seam.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{AuthResult, CurrentUser};

/// Trait for resolving the currently signed-in user.
///
/// Consumers treat this as a read-only lookup; signing in and out is the
/// provider's own business.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the current user, or `None` when nobody is signed in.
    async fn current_user(&self) -> AuthResult<Option<CurrentUser>>;
}

/// An auth provider holding a fixed, settable identity.
///
/// Used in tests and in single-user deployments where the identity is
/// established out of band.
#[derive(Debug, Default)]
pub struct StaticAuthProvider {
    user: RwLock<Option<CurrentUser>>,
}

impl StaticAuthProvider {
    /// Creates a provider with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider with the given user signed in.
    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Signs a user in.
    pub async fn sign_in(&self, user: CurrentUser) {
        *self.user.write().await = Some(user);
    }

    /// Signs the current user out.
    pub async fn sign_out(&self) {
        *self.user.write().await = None;
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn current_user(&self) -> AuthResult<Option<CurrentUser>> {
        Ok(self.user.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_starts_signed_out() {
        let provider = StaticAuthProvider::new();
        assert!(provider.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let provider = StaticAuthProvider::new();
        provider.sign_in(CurrentUser::new("u1", "jo@x.com")).await;

        let user = provider.current_user().await.unwrap().unwrap();
        assert_eq!(user.id, "u1");

        provider.sign_out().await;
        assert!(provider.current_user().await.unwrap().is_none());
    }
}
