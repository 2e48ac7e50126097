use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::auth::model::{AuthSession, AuthenticatedUser};

#[derive(Debug, Clone, Object)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Object)]
pub struct FederatedSignInRequest {
    /// Identity token issued by the external provider (e.g. Google OAuth)
    pub provider_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UserResponse {
    pub uid: String,
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub display_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub photo_url: Option<String>,
}

impl From<AuthenticatedUser> for UserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            uid: user.uid.to_string(),
            email: user.email,
            display_name: user.display_name,
            photo_url: user.photo_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SessionResponse {
    pub user: UserResponse,
    /// Session token to present as a bearer credential
    pub id_token: String,
    pub refresh_token: String,
    /// Seconds until `id_token` expires
    pub expires_in: u64,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user: session.user.into(),
            id_token: session.id_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
        }
    }
}
