//! Client wrapper for profile registration.

use crate::app_lib::{AppError, post_json};
use crate::features::profile::types::ProfileDraft;

/// Registers the finished profile draft against the connected wallet.
pub async fn register_profile(draft: &ProfileDraft) -> Result<(), AppError> {
    post_json("/users/register-wallet", draft).await
}
