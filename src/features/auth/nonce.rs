//! Single-use login nonce binding an authorization request to its callback.
//! The nonce is persisted across the full-page redirect to the identity
//! provider and consumed exactly once when the callback returns.

use crate::features::auth::session;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;

const NONCE_BYTES: usize = 16;

/// Generates a fresh random nonce, base64url-encoded without padding.
pub fn generate() -> String {
    let mut bytes = [0u8; NONCE_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Generates a nonce and persists it as the pending login nonce so it
/// survives the redirect round trip.
pub fn issue() -> String {
    let nonce = generate();
    session::set_pending_nonce(&nonce);
    nonce
}

#[cfg(test)]
mod tests {
    use super::{NONCE_BYTES, generate};
    use std::collections::HashSet;

    #[test]
    fn nonces_are_unique_across_many_invocations() {
        let mut seen = HashSet::new();
        for _ in 0..512 {
            assert!(seen.insert(generate()), "duplicate nonce generated");
        }
    }

    #[test]
    fn nonce_is_unpadded_base64url() {
        let nonce = generate();

        // 16 bytes encode to 22 chars without padding.
        assert_eq!(nonce.len(), NONCE_BYTES * 4 / 3 + 1);
        assert!(
            nonce
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
