//! Client wrapper for the zkLogin verify endpoint. Centralizing the exchange
//! keeps the token out of route code and prevents it from leaking into UI
//! state or messages.

use crate::app_lib::{AppError, post_json_response};
use crate::features::auth::types::{UserProfile, VerifyRequest, VerifyResponse};

/// Exchanges a raw identity token for the verified user profile.
/// A non-2xx response means the token must be discarded by the caller.
pub async fn verify_id_token(id_token: &str) -> Result<UserProfile, AppError> {
    let request = VerifyRequest {
        id_token: id_token.to_string(),
    };
    let response: VerifyResponse = post_json_response("/api/zklogin/verify", &request).await?;
    Ok(response.user)
}
