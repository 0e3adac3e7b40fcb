//! Auth feature: credential persistence, session state machine, login
//! client, and the route guard. This module touches security boundaries and
//! must avoid logging token material.
//!
//! Flow overview: login POSTs to `/auth/login`, persists the returned
//! credential, and marks the session authenticated. Reloads hydrate
//! optimistically from storage; the first 401/403 on an authenticated call
//! forces a sign-out and the guard redirects to `/login`.

pub(crate) mod record;
pub(crate) mod session;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod storage;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
