//! Login initiation: builds the Google authorization URL and hands the whole
//! page over to the identity provider. This never returns control to the
//! caller in the same page lifecycle; provider failures only surface after
//! the redirect back to the callback route.

use crate::app_lib::{AppError, config::AppConfig};
use crate::features::auth::nonce;
use url::Url;

pub const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const CALLBACK_PATH: &str = "/auth/callback";

const RESPONSE_TYPE: &str = "id_token";
const SCOPES: &str = "openid email profile";

/// Builds the authorization-request URL with the required query parameters.
pub fn authorize_url(client_id: &str, redirect_uri: &str, nonce: &str) -> Result<String, AppError> {
    let url = Url::parse_with_params(
        AUTHORIZE_ENDPOINT,
        &[
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("response_type", RESPONSE_TYPE),
            ("scope", SCOPES),
            ("nonce", nonce),
        ],
    )
    .map_err(|err| AppError::Config(format!("Failed to build authorization URL: {err}")))?;
    Ok(url.into())
}

/// Issues a nonce, persists it, and navigates the browser to the provider.
/// Terminal for the current page load when it succeeds.
pub fn start_login() -> Result<(), AppError> {
    let config = AppConfig::load();
    let client_id = config.google_client_id.trim().to_string();
    if client_id.is_empty() {
        return Err(AppError::Config(
            "Google client ID is not configured.".to_string(),
        ));
    }

    let window =
        web_sys::window().ok_or_else(|| AppError::Config("Window not found".to_string()))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| AppError::Config("Failed to read the window origin.".to_string()))?;

    let login_nonce = nonce::issue();
    let url = authorize_url(&client_id, &format!("{origin}{CALLBACK_PATH}"), &login_nonce)?;

    window
        .location()
        .set_href(&url)
        .map_err(|_| AppError::Network("Failed to reach the identity provider.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::{AUTHORIZE_ENDPOINT, authorize_url};
    use url::Url;

    #[test]
    fn authorize_url_carries_required_parameters() {
        let raw = authorize_url(
            "client-123",
            "https://app.suicollect.dev/auth/callback",
            "nonce-abc",
        )
        .expect("Failed to build URL");

        assert!(raw.starts_with(AUTHORIZE_ENDPOINT));

        let url = Url::parse(&raw).expect("Failed to parse URL");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("client_id".to_string(), "client-123".to_string()),
                (
                    "redirect_uri".to_string(),
                    "https://app.suicollect.dev/auth/callback".to_string()
                ),
                ("response_type".to_string(), "id_token".to_string()),
                ("scope".to_string(), "openid email profile".to_string()),
                ("nonce".to_string(), "nonce-abc".to_string()),
            ]
        );
    }

    #[test]
    fn authorize_url_escapes_redirect_uri() {
        let raw = authorize_url("id", "http://localhost:8080/auth/callback", "n")
            .expect("Failed to build URL");

        assert!(raw.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fcallback"));
    }
}
