use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display identifier shown in the navbar and sidebar.
    pub email: String,
    /// Provider-issued bearer token for the session.
    pub id_token: String,
    /// Provider-side account id.
    pub local_id: String,
}

/// Sign-in failure, normalized to a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider rejected the credentials.
    #[error("{0}")]
    CredentialRejected(String),
    /// The provider could not be reached or answered with garbage.
    #[error("Could not reach the sign-in service: {0}")]
    ProviderUnavailable(String),
}

/// Map a provider error code to something a person can read.
///
/// Unknown codes pass through unchanged so a new provider message is still
/// visible rather than swallowed.
pub(crate) fn normalize_reason(code: &str) -> String {
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password".to_string()
        }
        "USER_DISABLED" => "This account has been disabled".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many attempts, please try again later".to_string()
        }
        other => other.to_string(),
    }
}
