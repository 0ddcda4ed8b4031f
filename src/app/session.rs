//! Session persistence across the two browser storage scopes.
//!
//! "Remember me" logins go to the durable scope (localStorage) and survive
//! browser restarts; plain logins go to the ephemeral scope (sessionStorage)
//! and die with the tab. The store is the only code allowed to touch either
//! scope; everything else goes through `login`/`logout`/`restore`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::app::api::UserIdentity;

const USER_KEY: &str = "user";
const LOGGED_IN_KEY: &str = "isLoggedIn";

/// A string key-value scope. Browser storage on wasm32, in-memory elsewhere.
pub trait StorageScope {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory scope used in tests and non-browser builds. Cloning shares the
/// underlying map, so a "restarted" store can keep its durable scope.
#[derive(Clone, Default)]
pub struct MemoryScope {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl StorageScope for MemoryScope {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::StorageScope;

    /// localStorage (`durable = true`) or sessionStorage.
    pub struct BrowserScope {
        durable: bool,
    }

    impl BrowserScope {
        pub fn new(durable: bool) -> Self {
            BrowserScope { durable }
        }

        fn storage(&self) -> Option<web_sys::Storage> {
            let window = web_sys::window()?;
            let storage = if self.durable {
                window.local_storage()
            } else {
                window.session_storage()
            };
            storage.ok().flatten()
        }
    }

    impl StorageScope for BrowserScope {
        fn get(&self, key: &str) -> Option<String> {
            self.storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if let Some(storage) = self.storage() {
                let _ = storage.set_item(key, value);
            }
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

/// The session store: durable scope checked before the ephemeral one.
pub struct SessionStore {
    durable: Box<dyn StorageScope>,
    ephemeral: Box<dyn StorageScope>,
}

impl SessionStore {
    pub fn with_scopes(
        durable: Box<dyn StorageScope>,
        ephemeral: Box<dyn StorageScope>,
    ) -> Self {
        SessionStore { durable, ephemeral }
    }

    /// Fresh in-memory store (tests, native builds where no browser exists).
    pub fn in_memory() -> Self {
        SessionStore::with_scopes(
            Box::new(MemoryScope::default()),
            Box::new(MemoryScope::default()),
        )
    }

    /// The store backing the running app.
    pub fn runtime() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            SessionStore::with_scopes(
                Box::new(browser::BrowserScope::new(true)),
                Box::new(browser::BrowserScope::new(false)),
            )
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            SessionStore::in_memory()
        }
    }

    /// Persist a successful login into exactly one scope.
    pub fn login(&self, user: &UserIdentity, remember: bool) {
        let scope = if remember {
            &self.durable
        } else {
            &self.ephemeral
        };
        match serde_json::to_string(user) {
            Ok(raw) => {
                scope.set(USER_KEY, &raw);
                scope.set(LOGGED_IN_KEY, "true");
                tracing::info!(user_id = user.id, remember, "session stored");
            }
            Err(err) => tracing::warn!(%err, "could not serialize user for storage"),
        }
    }

    /// Clear both scopes unconditionally, whichever one was in use.
    pub fn logout(&self) {
        for scope in [&self.durable, &self.ephemeral] {
            scope.remove(USER_KEY);
            scope.remove(LOGGED_IN_KEY);
        }
        tracing::info!("session cleared");
    }

    /// Restore the persisted identity at cold start. The durable scope wins;
    /// a scope with a corrupt user blob is skipped.
    pub fn restore(&self) -> Option<UserIdentity> {
        for scope in [&self.durable, &self.ephemeral] {
            if scope.get(LOGGED_IN_KEY).as_deref() != Some("true") {
                continue;
            }
            let Some(raw) = scope.get(USER_KEY) else {
                continue;
            };
            match serde_json::from_str::<UserIdentity>(&raw) {
                Ok(user) => return Some(user),
                Err(err) => tracing::warn!(%err, "ignoring corrupt stored session"),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserIdentity {
        serde_json::from_str(r#"{"id":1,"name":"A","role":"admin"}"#).unwrap()
    }

    /// Simulate a browser restart: durable storage survives, session storage
    /// does not.
    fn restart(durable: &MemoryScope) -> SessionStore {
        SessionStore::with_scopes(
            Box::new(durable.clone()),
            Box::new(MemoryScope::default()),
        )
    }

    #[test]
    fn remembered_login_survives_restart() {
        let durable = MemoryScope::default();
        let store = restart(&durable);
        store.login(&user(), true);

        let restored = restart(&durable).restore();
        assert_eq!(restored, Some(user()));
    }

    #[test]
    fn ephemeral_login_does_not_survive_restart() {
        let durable = MemoryScope::default();
        let store = restart(&durable);
        store.login(&user(), false);

        // visible before the restart
        assert_eq!(store.restore(), Some(user()));
        // gone after it
        assert_eq!(restart(&durable).restore(), None);
    }

    #[test]
    fn logout_clears_whichever_scope_was_used() {
        for remember in [true, false] {
            let store = SessionStore::in_memory();
            store.login(&user(), remember);
            store.logout();
            assert_eq!(store.restore(), None);
        }
    }

    #[test]
    fn durable_scope_wins_over_ephemeral() {
        let store = SessionStore::in_memory();
        let other: UserIdentity = serde_json::from_str(r#"{"id":2,"name":"B"}"#).unwrap();
        store.login(&other, false);
        store.login(&user(), true);
        assert_eq!(store.restore().map(|u| u.id), Some(1));
    }

    #[test]
    fn corrupt_stored_user_is_treated_as_absent() {
        let durable = MemoryScope::default();
        durable.set("isLoggedIn", "true");
        durable.set("user", "{not json");
        let store =
            SessionStore::with_scopes(Box::new(durable), Box::new(MemoryScope::default()));
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn logged_in_flag_alone_is_not_a_session() {
        let store = SessionStore::in_memory();
        store.login(&user(), true);
        // restore requires both the flag and the user blob
        store.durable.remove("user");
        assert_eq!(store.restore(), None);
    }
}
