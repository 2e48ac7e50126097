use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

pub struct SignOutParams {
    pub id_token: String,
}

#[async_trait]
pub trait SignOutUseCase: Send + Sync {
    async fn execute(&self, params: SignOutParams) -> Result<(), AuthError>;
}
