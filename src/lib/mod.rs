//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Session handling
//!
//! Every `/api/*` call carries the bearer token from the persisted credential
//! (see `features::auth::storage`). A 401/403 on any authenticated call means
//! the session is no longer valid; routes surface the error to
//! `AuthContext::expire_session`, which clears the credential and lets the
//! guard redirect to `/login`. There is no refresh-token flow and no retry.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must still avoid logging
//! token material.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod envelope;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    delete_json, get_json, post_form, post_json, post_json_public, put_json,
};
pub(crate) use envelope::ApiResponse;
pub(crate) use errors::AppError;
