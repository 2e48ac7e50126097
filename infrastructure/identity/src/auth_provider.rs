use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{AuthSession, AuthenticatedUser};
use business::domain::auth::services::AuthProviderService;
use business::domain::shared::value_objects::UserId;

use crate::client::IdentityClient;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    photo_url: Option<String>,
    id_token: String,
    refresh_token: String,
    /// Seconds as a decimal string, per the Identity Toolkit wire format.
    expires_in: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    users: Option<Vec<LookupUser>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    photo_url: Option<String>,
}

pub struct GoogleIdentityProvider {
    client: IdentityClient,
}

impl GoogleIdentityProvider {
    pub fn new(client: IdentityClient) -> Self {
        Self { client }
    }

    /// Maps the provider's error codes onto domain errors. Unknown codes
    /// collapse into `ProviderUnavailable`.
    fn map_error_code(code: &str) -> AuthError {
        // WEAK_PASSWORD arrives with a trailing explanation after " : ".
        let code = code.split(' ').next().unwrap_or(code);
        match code {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                AuthError::InvalidCredentials
            }
            "EMAIL_EXISTS" => AuthError::EmailAlreadyInUse,
            "WEAK_PASSWORD" => AuthError::WeakPassword,
            "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" | "USER_DISABLED" => {
                AuthError::SessionInvalid
            }
            _ => AuthError::ProviderUnavailable,
        }
    }

    async fn post_for_session(
        &self,
        url: String,
        body: serde_json::Value,
    ) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| AuthError::ProviderUnavailable)?;

        if !response.status().is_success() {
            return Err(Self::extract_error(response).await);
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|_| AuthError::ProviderUnavailable)?;

        Ok(Self::into_session(session))
    }

    async fn extract_error(response: reqwest::Response) -> AuthError {
        let data: serde_json::Value = match response.json().await {
            Ok(data) => data,
            Err(_) => return AuthError::ProviderUnavailable,
        };

        data["error"]["message"]
            .as_str()
            .map(Self::map_error_code)
            .unwrap_or(AuthError::ProviderUnavailable)
    }

    fn into_session(response: SessionResponse) -> AuthSession {
        AuthSession {
            user: AuthenticatedUser {
                uid: UserId::new(response.local_id),
                email: response.email.unwrap_or_default(),
                display_name: response.display_name,
                photo_url: response.photo_url,
            },
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_in: response.expires_in.parse().unwrap_or(3600),
        }
    }
}

#[async_trait]
impl AuthProviderService for GoogleIdentityProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        self.post_for_session(self.client.sign_in_with_password_url(), body)
            .await
    }

    async fn sign_up_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        self.post_for_session(self.client.sign_up_url(), body).await
    }

    async fn sign_in_with_provider(
        &self,
        provider_token: &str,
    ) -> Result<AuthSession, AuthError> {
        let body = json!({
            "postBody": format!("id_token={}&providerId=google.com", provider_token),
            "requestUri": "http://localhost",
            "returnSecureToken": true,
            "returnIdpCredential": true,
        });

        self.post_for_session(self.client.sign_in_with_idp_url(), body)
            .await
    }

    async fn fetch_user(&self, id_token: &str) -> Result<AuthenticatedUser, AuthError> {
        let body = json!({ "idToken": id_token });

        let response = self
            .client
            .client
            .post(self.client.lookup_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| AuthError::ProviderUnavailable)?;

        if !response.status().is_success() {
            return Err(Self::extract_error(response).await);
        }

        let data: LookupResponse = response
            .json()
            .await
            .map_err(|_| AuthError::ProviderUnavailable)?;

        let user = data
            .users
            .and_then(|mut users| (!users.is_empty()).then(|| users.remove(0)))
            .ok_or(AuthError::SessionInvalid)?;

        Ok(AuthenticatedUser {
            uid: UserId::new(user.local_id),
            email: user.email.unwrap_or_default(),
            display_name: user.display_name,
            photo_url: user.photo_url,
        })
    }

    async fn sign_out(&self, _id_token: &str) -> Result<(), AuthError> {
        // The Identity Toolkit keeps no server-side session: signing out is
        // disposal of the tokens held by the caller.
        Ok(())
    }
}
