//! Auth feature module covering the zkLogin flow: nonce issuance, the Google
//! authorization redirect, callback token handling, verification, and session
//! hydration. It keeps authentication logic out of the UI and must stay
//! aligned with the verify endpoint's expectations. This module touches
//! security boundaries and must avoid logging tokens or nonce material.
//!
//! Flow Overview: Sign-in issues a single-use nonce, persists it, and
//! redirects the whole page to the Google authorization endpoint. The
//! provider redirects back to `/auth/callback` with an `id_token` in the URL
//! fragment; the callback route rejects tokens whose nonce claim does not
//! match the pending nonce, then exchanges the token at
//! `POST /api/zklogin/verify` for a user profile. The session hydrator
//! re-runs that exchange on reload or wallet change while a durable token is
//! present.

pub(crate) mod client;
pub(crate) mod id_token;
pub(crate) mod login;
pub(crate) mod nonce;
pub(crate) mod session;
pub(crate) mod state;
pub(crate) mod types;
