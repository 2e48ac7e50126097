use async_trait::async_trait;

use super::errors::AuthError;
use super::model::{AuthSession, AuthenticatedUser};

/// Service port for the hosted authentication provider. Injected into use
/// cases so no screen-level code reads ambient global auth state.
#[async_trait]
pub trait AuthProviderService: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError>;

    async fn sign_up_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError>;

    /// Federated sign-in with an identity token issued by an external
    /// provider (e.g. a Google OAuth credential).
    async fn sign_in_with_provider(&self, provider_token: &str) -> Result<AuthSession, AuthError>;

    /// Current-user lookup for a live session token.
    async fn fetch_user(&self, id_token: &str) -> Result<AuthenticatedUser, AuthError>;

    /// The hosted provider keeps no server-side session; implementations
    /// treat sign-out as disposal of the session token.
    async fn sign_out(&self, id_token: &str) -> Result<(), AuthError>;
}
