use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthenticatedUser;
use crate::domain::auth::services::AuthProviderService;
use crate::domain::auth::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};
use crate::domain::logger::Logger;

pub struct GetProfileUseCaseImpl {
    pub provider: Arc<dyn AuthProviderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self, params: GetProfileParams) -> Result<AuthenticatedUser, AuthError> {
        self.logger.debug("Fetching current user profile");
        self.provider.fetch_user(&params.id_token).await
    }
}
