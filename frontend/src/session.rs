//! Session context and the local mirror of the server-issued token/user pair.
//!
//! The session lives in one context object provided at the app root; the
//! storage side sits behind `SessionStore` so the mirroring rules are
//! testable without a browser.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::session::{AuthSession, User};

use crate::api::auth_api::validate_session;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Raw string storage plus the mirroring policy on top of it. A corrupt
/// stored user record clears the mirror instead of failing.
pub trait SessionStore {
    fn read_raw(&self, key: &str) -> Option<String>;
    fn write_raw(&self, key: &str, value: &str);
    fn remove_raw(&self, key: &str);

    fn load(&self) -> Option<AuthSession> {
        let token = self.read_raw(TOKEN_KEY)?;
        let user_json = self.read_raw(USER_KEY)?;
        match serde_json::from_str::<User>(&user_json) {
            Ok(user) => Some(AuthSession { token, user }),
            Err(_) => {
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &AuthSession) {
        self.write_raw(TOKEN_KEY, &session.token);
        if let Ok(user_json) = serde_json::to_string(&session.user) {
            self.write_raw(USER_KEY, &user_json);
        }
    }

    fn clear(&self) {
        self.remove_raw(TOKEN_KEY);
        self.remove_raw(USER_KEY);
    }
}

/// Browser localStorage adapter. Absent storage (SSR, disabled storage)
/// degrades to an empty store.
#[derive(Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSessionStore {
    fn read_raw(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn write_raw(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_raw(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}


#[derive(Clone, Copy)]
pub struct Session {
    pub current: Signal<Option<AuthSession>>,
    pub restoring: Signal<bool>,
}

impl Session {
    pub fn user(&self) -> Option<User> {
        self.current.read().as_ref().map(|s| s.user.clone())
    }

    pub fn sign_in(mut self, session: AuthSession) {
        BrowserSessionStore.save(&session);
        self.current.set(Some(session));
    }

    pub fn sign_out(mut self) {
        BrowserSessionStore.clear();
        self.current.set(None);
    }
}

/// Provide the session context and restore the stored mirror once at boot:
/// validate the token against the remote, refresh the mirrored user on
/// success, clear the mirror on rejection, keep the stored user when the
/// network itself fails.
pub fn use_session_provider() -> Session {
    let mut session =
        Session { current: use_signal(|| None), restoring: use_signal(|| true) };

    use_future(move || async move {
        let store = BrowserSessionStore;
        let Some(stored) = store.load() else {
            session.restoring.set(false);
            return;
        };
        match validate_session(stored.token.clone()).await {
            Ok(Some(user)) => {
                let fresh = AuthSession { token: stored.token, user };
                store.save(&fresh);
                session.current.set(Some(fresh));
            }
            Ok(None) => {
                tracing::info!("stored session rejected, clearing mirror");
                store.clear();
            }
            Err(e) => {
                tracing::warn!("session validation unreachable, keeping mirror: {e}");
                session.current.set(Some(stored));
            }
        }
        session.restoring.set(false);
    });

    use_context_provider(move || session);
    session
}

pub fn use_session() -> Session {
    use_context::<Session>()
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct MemorySessionStore {
        values: RefCell<BTreeMap<String, String>>,
    }

    impl SessionStore for MemorySessionStore {
        fn read_raw(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write_raw(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove_raw(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }

    fn sample_session() -> AuthSession {
        AuthSession {
            token: "tok-123".to_string(),
            user: User {
                id: "u1".to_string(),
                username: "reader".to_string(),
                email: "reader@example.com".to_string(),
                role: "user".to_string(),
            },
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemorySessionStore::default();
        let session = sample_session();
        store.save(&session);
        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn corrupt_user_record_clears_the_mirror() {
        let store = MemorySessionStore::default();
        store.write_raw(TOKEN_KEY, "tok-123");
        store.write_raw(USER_KEY, "{not json");
        assert_eq!(store.load(), None);
        assert_eq!(store.read_raw(TOKEN_KEY), None);
        assert_eq!(store.read_raw(USER_KEY), None);
    }

    #[test]
    fn missing_token_means_no_session() {
        let store = MemorySessionStore::default();
        store.write_raw(USER_KEY, "{}");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemorySessionStore::default();
        store.save(&sample_session());
        store.clear();
        assert!(store.read_raw(TOKEN_KEY).is_none());
        assert!(store.read_raw(USER_KEY).is_none());
    }
}
