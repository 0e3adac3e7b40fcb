//! Durable credential store backed by browser localStorage. The store is the
//! sole owner of the persisted credential; `AuthContext` keeps an in-memory
//! projection. When localStorage is unavailable (disabled persistence,
//! private mode quirks) the credential degrades to the in-memory copy for the
//! page lifetime: the session is lost on reload but the app keeps working.
//!
//! Record shapes and revalidation live in `record`, which is natively
//! testable; this module only moves them in and out of the browser.

use crate::features::auth::record::{StoredUser, rebuild};
use crate::features::auth::types::Credential;
use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;

const TOKEN_KEY: &str = "leads.auth.token";
const USER_KEY: &str = "leads.auth.user";

thread_local! {
    static MEMORY: RefCell<Option<Credential>> = const { RefCell::new(None) };
}

/// Persists the credential, overwriting any prior value. Storage failures are
/// logged and the in-memory copy keeps the session alive for this page.
pub fn save(credential: &Credential) {
    MEMORY.with(|memory| *memory.borrow_mut() = Some(credential.clone()));

    if let Err(err) = LocalStorage::set(TOKEN_KEY, &credential.token) {
        gloo_console::warn!(format!("credential not persisted: {err}"));
        return;
    }
    if let Err(err) = LocalStorage::set(USER_KEY, &StoredUser::of(credential)) {
        gloo_console::warn!(format!("credential not persisted: {err}"));
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// Reads the persisted credential. Missing, corrupt, or partial data yields
/// `None`; this never panics.
pub fn load() -> Option<Credential> {
    let in_memory = MEMORY.with(|memory| memory.borrow().clone());
    if in_memory.is_some() {
        return in_memory;
    }

    let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
    let user: StoredUser = LocalStorage::get(USER_KEY).ok()?;
    let credential = rebuild(&token, &user)?;
    MEMORY.with(|memory| *memory.borrow_mut() = Some(credential.clone()));
    Some(credential)
}

/// Removes every persisted field. Clearing an empty store is a no-op.
pub fn clear() {
    MEMORY.with(|memory| *memory.borrow_mut() = None);
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}

/// Bearer token for the HTTP helpers, read fresh on every request.
pub fn token() -> Option<String> {
    load().map(|credential| credential.token)
}
