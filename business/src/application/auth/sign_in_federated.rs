use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthSession;
use crate::domain::auth::services::AuthProviderService;
use crate::domain::auth::use_cases::sign_in_federated::{
    FederatedSignInParams, FederatedSignInUseCase,
};
use crate::domain::logger::Logger;

pub struct FederatedSignInUseCaseImpl {
    pub provider: Arc<dyn AuthProviderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FederatedSignInUseCase for FederatedSignInUseCaseImpl {
    async fn execute(&self, params: FederatedSignInParams) -> Result<AuthSession, AuthError> {
        if params.provider_token.trim().is_empty() {
            return Err(AuthError::SessionInvalid);
        }

        self.logger.info("Signing in with federated provider");

        let session = self
            .provider
            .sign_in_with_provider(&params.provider_token)
            .await?;

        self.logger
            .info(&format!("Federated user signed in: {}", session.user.uid));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::AuthenticatedUser;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub AuthProvider {}

        #[async_trait]
        impl AuthProviderService for AuthProvider {
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
            async fn sign_in_with_provider(
                &self,
                provider_token: &str,
            ) -> Result<AuthSession, AuthError>;
            async fn fetch_user(&self, id_token: &str) -> Result<AuthenticatedUser, AuthError>;
            async fn sign_out(&self, id_token: &str) -> Result<(), AuthError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_sign_in_when_provider_token_accepted() {
        let mut mock_provider = MockAuthProvider::new();
        mock_provider.expect_sign_in_with_provider().returning(|_| {
            Ok(AuthSession {
                user: AuthenticatedUser {
                    uid: UserId::new("uid-3"),
                    email: "carla@example.com".to_string(),
                    display_name: Some("Carla".to_string()),
                    photo_url: Some("https://photos.example.com/carla.jpg".to_string()),
                },
                id_token: "id-token".to_string(),
                refresh_token: "refresh-token".to_string(),
                expires_in: 3600,
            })
        });

        let use_case = FederatedSignInUseCaseImpl {
            provider: Arc::new(mock_provider),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FederatedSignInParams {
                provider_token: "google-oauth-credential".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_blank_provider_token_without_remote_call() {
        let mock_provider = MockAuthProvider::new();

        let use_case = FederatedSignInUseCaseImpl {
            provider: Arc::new(mock_provider),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FederatedSignInParams {
                provider_token: " ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::SessionInvalid));
    }
}
