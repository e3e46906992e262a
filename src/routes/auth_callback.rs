//! OAuth callback route. The identity provider redirects here with the
//! identity token in the URL fragment. The handler walks an explicit machine:
//! parse the fragment, reject tokens missing or unbound to the pending
//! nonce, persist the raw token, exchange it for a profile, and redirect to
//! a safe route in every terminal state. The fragment is cleared from
//! history so tokens never linger in the address bar.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{client, id_token, session, state::use_auth, types::AuthError};
use crate::features::wallet::state::use_wallet;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq)]
enum CallbackStatus {
    Idle,
    MissingToken,
    Verifying,
    Verified,
    Failed(AuthError),
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = use_auth();
    let wallet = use_wallet();
    let navigate = use_navigate();
    let (status, set_status) = signal(CallbackStatus::Idle);

    let verify_action = Action::new_local(move |token: &String| {
        let token = token.clone();
        async move { client::verify_id_token(&token).await }
    });

    let navigate_after_verify = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(profile) => {
                    let address = wallet
                        .account
                        .get_untracked()
                        .map(|account| account.address);
                    auth.complete_login(profile, address);
                    set_status.set(CallbackStatus::Verified);
                }
                Err(err) => {
                    // A rejected token is gone for good; the user must
                    // re-initiate login.
                    session::clear_id_token();
                    set_status.set(CallbackStatus::Failed(AuthError::VerificationFailed(
                        err.to_string(),
                    )));
                }
            }
            navigate_after_verify(paths::HOME, Default::default());
        }
    });

    Effect::new(move |_| {
        if status.get() != CallbackStatus::Idle {
            return;
        }

        let fragment = current_fragment();
        clear_callback_fragment();
        let pending = session::take_pending_nonce();

        match classify_callback(&fragment, pending.as_deref()) {
            CallbackDecision::MissingToken => {
                set_status.set(CallbackStatus::MissingToken);
                navigate(paths::HOME, Default::default());
            }
            CallbackDecision::RejectedNonce => {
                set_status.set(CallbackStatus::Failed(AuthError::VerificationFailed(
                    "The response was not bound to this sign-in attempt.".to_string(),
                )));
                navigate(paths::HOME, Default::default());
            }
            CallbackDecision::Verify { id_token } => {
                session::set_id_token(&id_token);
                set_status.set(CallbackStatus::Verifying);
                verify_action.dispatch(id_token);
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto text-center">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Signing you in"
                </h1>
                {move || match status.get() {
                    CallbackStatus::Idle | CallbackStatus::Verifying => view! {
                        <div class="mt-4 flex flex-col items-center gap-3">
                            <Spinner />
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Processing sign-in..."
                            </p>
                        </div>
                    }
                    .into_any(),
                    CallbackStatus::Verified => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Signed in. Redirecting...".to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    CallbackStatus::MissingToken => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Error
                                message=AuthError::MissingToken.to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    CallbackStatus::Failed(error) => view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=error.to_string() />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}

/// First transition of the callback machine, decided before any network call.
#[derive(Clone, Debug, PartialEq)]
enum CallbackDecision {
    MissingToken,
    RejectedNonce,
    Verify { id_token: String },
}

fn classify_callback(fragment: &str, pending_nonce: Option<&str>) -> CallbackDecision {
    let Some(token) = extract_id_token(fragment) else {
        return CallbackDecision::MissingToken;
    };
    if !id_token::matches_pending(&token, pending_nonce) {
        return CallbackDecision::RejectedNonce;
    }
    CallbackDecision::Verify { id_token: token }
}

/// Pulls the `id_token` parameter out of a `#key=value&...` fragment.
fn extract_id_token(fragment: &str) -> Option<String> {
    let trimmed = fragment.trim_start_matches('#');
    if trimmed.is_empty() {
        return None;
    }
    url::form_urlencoded::parse(trimmed.as_bytes())
        .find(|(key, _)| key == "id_token")
        .map(|(_, value)| value.into_owned())
}

fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

fn clear_callback_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(_) => return,
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(paths::AUTH_CALLBACK));
}

#[cfg(test)]
mod tests {
    use super::{CallbackDecision, classify_callback, extract_id_token};
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    fn token_with_nonce(nonce: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::json!({ "nonce": nonce }).to_string());
        format!("eyJhbGciOiJSUzI1NiJ9.{payload}.c2lnbmF0dXJl")
    }

    #[test]
    fn extracts_token_from_fragment() {
        assert_eq!(
            extract_id_token("#id_token=abc.def.ghi&state=x"),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(
            extract_id_token("id_token=abc.def.ghi"),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn denied_or_empty_fragments_have_no_token() {
        assert_eq!(extract_id_token(""), None);
        assert_eq!(extract_id_token("#"), None);
        assert_eq!(extract_id_token("#error=access_denied"), None);
    }

    #[test]
    fn missing_token_short_circuits_before_any_exchange() {
        assert_eq!(
            classify_callback("#error=access_denied", Some("n-1")),
            CallbackDecision::MissingToken
        );
    }

    #[test]
    fn unbound_tokens_are_rejected() {
        let token = token_with_nonce("n-1");

        assert_eq!(
            classify_callback(&format!("#id_token={token}"), Some("n-2")),
            CallbackDecision::RejectedNonce
        );
        assert_eq!(
            classify_callback(&format!("#id_token={token}"), None),
            CallbackDecision::RejectedNonce
        );
    }

    #[test]
    fn bound_tokens_proceed_to_verification() {
        let token = token_with_nonce("n-1");

        assert_eq!(
            classify_callback(&format!("#id_token={token}"), Some("n-1")),
            CallbackDecision::Verify { id_token: token }
        );
    }
}
