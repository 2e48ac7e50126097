use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthSession;
use crate::domain::auth::services::AuthProviderService;
use crate::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};
use crate::domain::logger::Logger;

pub struct SignInUseCaseImpl {
    pub provider: Arc<dyn AuthProviderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    async fn execute(&self, params: SignInParams) -> Result<AuthSession, AuthError> {
        if params.email.trim().is_empty() {
            return Err(AuthError::EmailEmpty);
        }
        if params.password.is_empty() {
            return Err(AuthError::PasswordEmpty);
        }

        self.logger
            .info(&format!("Signing in user: {}", params.email));

        let session = self
            .provider
            .sign_in_with_password(params.email.trim(), &params.password)
            .await?;

        self.logger
            .info(&format!("User signed in: {}", session.user.uid));
        Ok(session)
    }
}
