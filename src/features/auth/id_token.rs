//! Claim inspection for provider identity tokens. The token is a compact JWT;
//! only the payload segment is decoded here, and only to bind the callback to
//! the login attempt that initiated it. Signature verification is the verify
//! endpoint's job, never the client's.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Reads the `nonce` claim from an identity token without verifying it.
pub fn nonce_claim(id_token: &str) -> Option<String> {
    let payload = id_token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("nonce")?.as_str().map(str::to_string)
}

/// Checks the token's nonce claim against the pending login nonce. Absent or
/// unreadable claims never match; an unbound token must not be trusted.
pub fn matches_pending(id_token: &str, pending: Option<&str>) -> bool {
    match (nonce_claim(id_token), pending) {
        (Some(claim), Some(pending)) => claim == pending,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{matches_pending, nonce_claim};
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    fn token_with_claims(claims: &serde_json::Value) -> String {
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("eyJhbGciOiJSUzI1NiJ9.{payload}.c2lnbmF0dXJl")
    }

    #[test]
    fn reads_nonce_claim_from_payload() {
        let token = token_with_claims(&serde_json::json!({
            "sub": "1234567890",
            "nonce": "expected-nonce",
        }));

        assert_eq!(nonce_claim(&token), Some("expected-nonce".to_string()));
    }

    #[test]
    fn missing_or_malformed_claims_yield_none() {
        let no_nonce = token_with_claims(&serde_json::json!({ "sub": "x" }));
        assert_eq!(nonce_claim(&no_nonce), None);

        assert_eq!(nonce_claim("abc.def.ghi"), None);
        assert_eq!(nonce_claim("not-a-jwt"), None);
    }

    #[test]
    fn matches_only_when_claim_equals_pending() {
        let token = token_with_claims(&serde_json::json!({ "nonce": "n-1" }));

        assert!(matches_pending(&token, Some("n-1")));
        assert!(!matches_pending(&token, Some("n-2")));
        assert!(!matches_pending(&token, None));
        assert!(!matches_pending("abc.def.ghi", Some("n-1")));
    }
}
