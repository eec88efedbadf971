//! Session context and its localStorage boundary.
//!
//! DESIGN
//! ======
//! The storage keys live in exactly one module: [`load`] runs once at app
//! mount, [`store`] once at login, [`clear`] once at logout. Pages observe
//! the session only through the `RwSignal<SessionState>` context, so a
//! logout is visible to every dependent view immediately. No page touches
//! `localStorage` directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use models::{Role, Session};

#[cfg(feature = "hydrate")]
const KEY_TOKEN: &str = "token";
#[cfg(feature = "hydrate")]
const KEY_ROLE: &str = "role";
#[cfg(feature = "hydrate")]
const KEY_EMAIL: &str = "userEmail";
#[cfg(feature = "hydrate")]
const KEY_ACCOUNT_NUMBER: &str = "accountNumber";
#[cfg(feature = "hydrate")]
const KEY_BANK_ID: &str = "bankId";
#[cfg(feature = "hydrate")]
const KEY_CUSTOMER_NAME: &str = "customerName";

/// Session state provided via context to every page.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the one-time localStorage read has happened.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl SessionState {
    /// The active session once restoration has finished, if any.
    #[must_use]
    pub fn ready(&self) -> Option<&Session> {
        if self.loading { None } else { self.session.as_ref() }
    }

    /// True once restoration finished with no stored session; the page
    /// must show its login prompt instead of fetching.
    #[must_use]
    pub fn missing(&self) -> bool {
        !self.loading && self.session.is_none()
    }

    /// The active session when it carries the given role.
    #[must_use]
    pub fn with_role(&self, role: Role) -> Option<&Session> {
        self.ready().filter(|s| s.role == role)
    }
}

/// Read the persisted session from localStorage.
///
/// Returns `None` off-browser, when no token is stored, or when the stored
/// role is not one the client knows.
#[must_use]
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let get = |key: &str| storage.get_item(key).ok().flatten().filter(|v| !v.trim().is_empty());

        let token = get(KEY_TOKEN)?;
        let role = Role::from_str(&get(KEY_ROLE)?)?;
        let email = get(KEY_EMAIL).unwrap_or_default();
        Some(Session {
            token,
            role,
            email,
            account_number: get(KEY_ACCOUNT_NUMBER),
            bank_id: get(KEY_BANK_ID).and_then(|v| v.parse().ok()),
            customer_name: get(KEY_CUSTOMER_NAME),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly-minted session to localStorage.
pub fn store(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(KEY_TOKEN, &session.token);
        let _ = storage.set_item(KEY_ROLE, session.role.as_str());
        let _ = storage.set_item(KEY_EMAIL, &session.email);
        match &session.account_number {
            Some(number) => {
                let _ = storage.set_item(KEY_ACCOUNT_NUMBER, number);
            }
            None => {
                let _ = storage.remove_item(KEY_ACCOUNT_NUMBER);
            }
        }
        match session.bank_id {
            Some(id) => {
                let _ = storage.set_item(KEY_BANK_ID, &id.to_string());
            }
            None => {
                let _ = storage.remove_item(KEY_BANK_ID);
            }
        }
        match &session.customer_name {
            Some(name) => {
                let _ = storage.set_item(KEY_CUSTOMER_NAME, name);
            }
            None => {
                let _ = storage.remove_item(KEY_CUSTOMER_NAME);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove every persisted session key.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            for key in [KEY_TOKEN, KEY_ROLE, KEY_EMAIL, KEY_ACCOUNT_NUMBER, KEY_BANK_ID, KEY_CUSTOMER_NAME] {
                let _ = storage.remove_item(key);
            }
        }
    }
}
