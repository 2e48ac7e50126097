/// Configuration for the hosted identity provider.
pub struct IdentityConfig {
    /// Cloud project id, used to validate token issuer and audience.
    pub project_id: String,
    /// Web API key sent with Identity Toolkit REST calls.
    pub api_key: String,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        Self {
            project_id: std::env::var("IDENTITY_PROJECT_ID")
                .expect("IDENTITY_PROJECT_ID must be set"),
            api_key: std::env::var("IDENTITY_API_KEY").expect("IDENTITY_API_KEY must be set"),
        }
    }
}
