use reqwest::Client;

/// Shared HTTP client configuration for the Google Identity Toolkit API.
pub struct IdentityClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl IdentityClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
        }
    }

    pub fn sign_in_with_password_url(&self) -> String {
        format!(
            "{}/accounts:signInWithPassword?key={}",
            self.base_url, self.api_key
        )
    }

    pub fn sign_up_url(&self) -> String {
        format!("{}/accounts:signUp?key={}", self.base_url, self.api_key)
    }

    pub fn sign_in_with_idp_url(&self) -> String {
        format!(
            "{}/accounts:signInWithIdp?key={}",
            self.base_url, self.api_key
        )
    }

    pub fn lookup_url(&self) -> String {
        format!("{}/accounts:lookup?key={}", self.base_url, self.api_key)
    }
}
