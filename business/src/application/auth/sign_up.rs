use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthSession;
use crate::domain::auth::services::AuthProviderService;
use crate::domain::auth::use_cases::sign_up::{SignUpParams, SignUpUseCase};
use crate::domain::logger::Logger;

pub struct SignUpUseCaseImpl {
    pub provider: Arc<dyn AuthProviderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignUpUseCase for SignUpUseCaseImpl {
    async fn execute(&self, params: SignUpParams) -> Result<AuthSession, AuthError> {
        if params.email.trim().is_empty() {
            return Err(AuthError::EmailEmpty);
        }
        if params.password.is_empty() || params.confirm_password.is_empty() {
            return Err(AuthError::PasswordEmpty);
        }
        if params.password != params.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        self.logger
            .info(&format!("Creating account for: {}", params.email));

        let session = self
            .provider
            .sign_up_with_password(params.email.trim(), &params.password)
            .await?;

        self.logger
            .info(&format!("Account created: {}", session.user.uid));
        Ok(session)
    }
}
