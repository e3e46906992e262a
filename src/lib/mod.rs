//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flow
//!
//! 1. **Initiate:** The client generates a login nonce, persists it, and
//!    performs a full-page redirect to the Google authorization endpoint.
//! 2. **Callback:** The provider redirects back to `/auth/callback` with the
//!    identity token in the URL fragment. The client checks the token's nonce
//!    claim against the pending nonce before trusting the response.
//! 3. **Verify:** The raw token is exchanged at `POST /api/zklogin/verify`
//!    for a user profile, which hydrates the in-memory session.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging sensitive data.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod theme;

pub(crate) use api::{post_json, post_json_response};
pub(crate) use errors::AppError;
