#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.email_empty")]
    EmailEmpty,
    #[error("auth.password_empty")]
    PasswordEmpty,
    #[error("auth.password_mismatch")]
    PasswordMismatch,
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.email_already_in_use")]
    EmailAlreadyInUse,
    #[error("auth.weak_password")]
    WeakPassword,
    #[error("auth.session_invalid")]
    SessionInvalid,
    #[error("auth.provider_unavailable")]
    ProviderUnavailable,
}
