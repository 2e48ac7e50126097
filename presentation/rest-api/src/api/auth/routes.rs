use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::errors::AuthError;
use business::domain::auth::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};
use business::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};
use business::domain::auth::use_cases::sign_in_federated::{
    FederatedSignInParams, FederatedSignInUseCase,
};
use business::domain::auth::use_cases::sign_out::{SignOutParams, SignOutUseCase};
use business::domain::auth::use_cases::sign_up::{SignUpParams, SignUpUseCase};

use crate::api::auth::dto::{
    FederatedSignInRequest, SessionResponse, SignInRequest, SignUpRequest, UserResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    sign_in_use_case: Arc<dyn SignInUseCase>,
    sign_up_use_case: Arc<dyn SignUpUseCase>,
    federated_sign_in_use_case: Arc<dyn FederatedSignInUseCase>,
    sign_out_use_case: Arc<dyn SignOutUseCase>,
    get_profile_use_case: Arc<dyn GetProfileUseCase>,
}

impl AuthApi {
    pub fn new(
        sign_in_use_case: Arc<dyn SignInUseCase>,
        sign_up_use_case: Arc<dyn SignUpUseCase>,
        federated_sign_in_use_case: Arc<dyn FederatedSignInUseCase>,
        sign_out_use_case: Arc<dyn SignOutUseCase>,
        get_profile_use_case: Arc<dyn GetProfileUseCase>,
    ) -> Self {
        Self {
            sign_in_use_case,
            sign_up_use_case,
            federated_sign_in_use_case,
            sign_out_use_case,
            get_profile_use_case,
        }
    }

    fn session_error(err: AuthError) -> AuthSessionResponse {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => AuthSessionResponse::BadRequest(json),
            401 => AuthSessionResponse::Unauthorized(json),
            409 => AuthSessionResponse::Conflict(json),
            _ => AuthSessionResponse::ProviderError(json),
        }
    }
}

/// Authentication API
///
/// Sign-in, sign-up, federated sign-in, sign-out and current-user lookup
/// against the hosted identity provider.
#[OpenApi]
impl AuthApi {
    /// Sign in with email and password
    #[oai(path = "/auth/sign-in", method = "post", tag = "ApiTags::Auth")]
    async fn sign_in(&self, body: Json<SignInRequest>) -> AuthSessionResponse {
        match self
            .sign_in_use_case
            .execute(SignInParams {
                email: body.0.email,
                password: body.0.password,
            })
            .await
        {
            Ok(session) => AuthSessionResponse::Ok(Json(session.into())),
            Err(err) => Self::session_error(err),
        }
    }

    /// Create an account with email and password
    #[oai(path = "/auth/sign-up", method = "post", tag = "ApiTags::Auth")]
    async fn sign_up(&self, body: Json<SignUpRequest>) -> AuthSessionResponse {
        match self
            .sign_up_use_case
            .execute(SignUpParams {
                email: body.0.email,
                password: body.0.password,
                confirm_password: body.0.confirm_password,
            })
            .await
        {
            Ok(session) => AuthSessionResponse::Ok(Json(session.into())),
            Err(err) => Self::session_error(err),
        }
    }

    /// Sign in with a federated provider credential
    #[oai(
        path = "/auth/sign-in/federated",
        method = "post",
        tag = "ApiTags::Auth"
    )]
    async fn sign_in_federated(&self, body: Json<FederatedSignInRequest>) -> AuthSessionResponse {
        match self
            .federated_sign_in_use_case
            .execute(FederatedSignInParams {
                provider_token: body.0.provider_token,
            })
            .await
        {
            Ok(session) => AuthSessionResponse::Ok(Json(session.into())),
            Err(err) => Self::session_error(err),
        }
    }

    /// Sign out the current session
    #[oai(path = "/auth/sign-out", method = "post", tag = "ApiTags::Auth")]
    async fn sign_out(&self, auth: SessionBearer) -> SignOutResponse {
        match self
            .sign_out_use_case
            .execute(SignOutParams {
                id_token: auth.0.token,
            })
            .await
        {
            Ok(()) => SignOutResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SignOutResponse::Unauthorized(json)
            }
        }
    }

    /// Get the current user's profile
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn get_profile(&self, auth: SessionBearer) -> GetProfileResponse {
        match self
            .get_profile_use_case
            .execute(GetProfileParams {
                id_token: auth.0.token,
            })
            .await
        {
            Ok(user) => GetProfileResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetProfileResponse::Unauthorized(json),
                    _ => GetProfileResponse::ProviderError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AuthSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    ProviderError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignOutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 502)]
    ProviderError(Json<ErrorResponse>),
}
