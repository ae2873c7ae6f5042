//! REST client for the identity provider's password sign-in endpoint.

use serde::{Deserialize, Serialize};

use crate::hub::SessionHub;
use crate::session::{normalize_reason, AuthError, Session};

/// Identity provider endpoint configuration.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl AuthConfig {
    /// Configuration baked in at compile time, with a demo fallback so a
    /// plain `dx serve` still starts.
    pub fn from_env() -> Self {
        Self {
            api_key: option_env!("MEDIASHELF_AUTH_API_KEY")
                .unwrap_or("demo-api-key")
                .to_string(),
            endpoint: option_env!("MEDIASHELF_AUTH_ENDPOINT")
                .unwrap_or("https://identitytoolkit.googleapis.com")
                .to_string(),
        }
    }
}

/// Client for the provider. Publishes session changes through its hub.
#[derive(Clone)]
pub struct AuthClient {
    config: AuthConfig,
    hub: SessionHub,
    http: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSignInResponse {
    email: String,
    id_token: String,
    local_id: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl AuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            hub: SessionHub::new(),
            http: reqwest::Client::new(),
        }
    }

    /// The hub this client publishes to.
    pub fn hub(&self) -> &SessionHub {
        &self.hub
    }

    /// Exchange an email/password pair for a session.
    ///
    /// On success the session is published through the hub before it is
    /// returned, so observers and the caller see the same value.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let url = format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.config.endpoint, self.config.api_key
        );
        let response = self
            .http
            .post(&url)
            .json(&PasswordSignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "sign-in rejected");
            return Err(rejection_from_body(&body));
        }

        let body: PasswordSignInResponse = response
            .json()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;
        let session = Session {
            email: body.email,
            id_token: body.id_token,
            local_id: body.local_id,
        };
        self.hub.set_session(Some(session.clone()));
        Ok(session)
    }

    /// Drop the current session and notify observers.
    pub fn sign_out(&self) {
        self.hub.set_session(None);
    }
}

/// Turn a provider error body into an [`AuthError`].
fn rejection_from_body(body: &str) -> AuthError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => AuthError::CredentialRejected(normalize_reason(&parsed.error.message)),
        Err(_) => {
            AuthError::ProviderUnavailable("unexpected response from the sign-in service".to_string())
        }
    }
}
