use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthSession;

pub struct FederatedSignInParams {
    /// Identity token issued by the external provider.
    pub provider_token: String,
}

#[async_trait]
pub trait FederatedSignInUseCase: Send + Sync {
    async fn execute(&self, params: FederatedSignInParams) -> Result<AuthSession, AuthError>;
}
