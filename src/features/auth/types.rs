//! Request and response types for the zkLogin verify exchange, plus the
//! auth-level failure taxonomy. These payloads carry identity tokens, so they
//! must never be logged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile derived from a verified identity token. Not user-editable
/// directly; it mirrors what the verify endpoint asserts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(rename = "idToken")]
    pub id_token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub user: UserProfile,
}

/// Login and callback failures. Every variant is recoverable: the session
/// degrades to signed-out and the user lands back on a safe route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The callback fragment did not carry an `id_token` parameter.
    MissingToken,
    /// The verify endpoint rejected the token, was unreachable, or the
    /// token's nonce claim did not match the pending login nonce.
    VerificationFailed(String),
    /// Login was attempted without a connected wallet account.
    NoWalletAvailable,
}

impl fmt::Display for AuthError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingToken => {
                write!(
                    formatter,
                    "The sign-in response did not include an identity token."
                )
            }
            AuthError::VerificationFailed(message) => {
                write!(formatter, "Sign-in verification failed: {message}")
            }
            AuthError::NoWalletAvailable => {
                write!(formatter, "Connect a wallet before signing in.")
            }
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_uses_camel_case_token_key() {
        let request = VerifyRequest {
            id_token: "abc.def.ghi".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert_eq!(json, r#"{"idToken":"abc.def.ghi"}"#);
    }

    #[test]
    fn verify_response_deserializes_profile() {
        let json = r#"{"user":{"displayName":"Alice","email":"a@x.com"}}"#;

        let response: VerifyResponse = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.user.display_name, "Alice");
        assert_eq!(response.user.email, "a@x.com");
        assert_eq!(response.user.avatar_url, None);
    }

    #[test]
    fn profile_round_trips_with_avatar() {
        let profile = UserProfile {
            display_name: "Emily Nguyen".to_string(),
            email: "emily.nguyen@example.com".to_string(),
            avatar_url: Some("https://i.pravatar.cc/150?u=emilynguyen".to_string()),
        };

        let json = serde_json::to_string(&profile).expect("Failed to serialize");
        assert!(json.contains("avatarUrl"));

        let parsed: UserProfile = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(parsed, profile);
    }
}
