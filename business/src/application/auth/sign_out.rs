use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthProviderService;
use crate::domain::auth::use_cases::sign_out::{SignOutParams, SignOutUseCase};
use crate::domain::logger::Logger;

pub struct SignOutUseCaseImpl {
    pub provider: Arc<dyn AuthProviderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignOutUseCase for SignOutUseCaseImpl {
    async fn execute(&self, params: SignOutParams) -> Result<(), AuthError> {
        self.logger.info("Signing out current user");
        self.provider.sign_out(&params.id_token).await
    }
}
