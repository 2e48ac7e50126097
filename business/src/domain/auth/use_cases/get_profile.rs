use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthenticatedUser;

pub struct GetProfileParams {
    pub id_token: String,
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetProfileParams) -> Result<AuthenticatedUser, AuthError>;
}
