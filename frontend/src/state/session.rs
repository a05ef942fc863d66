use std::{cell::RefCell, collections::HashMap, rc::Rc};

use leptos::*;

use crate::api::ApiError;

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "user_id";
const ROLE_ID_KEY: &str = "role_id";

/// Signed-in user as persisted between page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub role_id: Option<i64>,
}

/// Key-value backend for the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// `window.localStorage`.
pub struct LocalStorageStore;

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        crate::utils::storage::local_storage()
            .ok()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        crate::utils::storage::local_storage()?
            .set_item(key, value)
            .map_err(|_| ApiError::storage(format!("Failed to store {}", key)))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = crate::utils::storage::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Read/write/clear access to the persisted session, injected into views
/// and into the API client.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("signed_in", &self.read().is_some())
            .finish()
    }
}

impl SessionContext {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// `localStorage` in the browser; host builds fall back to memory.
    pub fn browser() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorageStore)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    pub fn read(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
        let user_id = self.store.get(USER_ID_KEY)?.parse().ok()?;
        let role_id = self
            .store
            .get(ROLE_ID_KEY)
            .and_then(|raw| raw.parse().ok());
        Some(Session {
            token,
            user_id,
            role_id,
        })
    }

    pub fn token(&self) -> Option<String> {
        self.read().map(|session| session.token)
    }

    pub fn role_id(&self) -> Option<i64> {
        self.read().and_then(|session| session.role_id)
    }

    pub fn write(&self, session: &Session) -> Result<(), ApiError> {
        self.store.set(TOKEN_KEY, &session.token)?;
        self.store.set(USER_ID_KEY, &session.user_id.to_string())?;
        match session.role_id {
            Some(role_id) => self.store.set(ROLE_ID_KEY, &role_id.to_string())?,
            None => self.store.remove(ROLE_ID_KEY),
        }
        Ok(())
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_ID_KEY, ROLE_ID_KEY] {
            self.store.remove(key);
        }
    }
}

pub fn provide_session(session: SessionContext) {
    provide_context(session);
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::browser)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "abc".into(),
            user_id: 12,
            role_id: Some(8),
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let ctx = SessionContext::in_memory();
        assert!(ctx.read().is_none());
        ctx.write(&session()).unwrap();
        assert_eq!(ctx.read(), Some(session()));
        assert_eq!(ctx.token().as_deref(), Some("abc"));
        assert_eq!(ctx.role_id(), Some(8));
    }

    #[test]
    fn clear_forgets_everything() {
        let ctx = SessionContext::in_memory();
        ctx.write(&session()).unwrap();
        ctx.clear();
        assert!(ctx.read().is_none());
        assert!(ctx.token().is_none());
    }

    #[test]
    fn clones_share_the_same_store() {
        let ctx = SessionContext::in_memory();
        let other = ctx.clone();
        ctx.write(&session()).unwrap();
        assert_eq!(other.read(), Some(session()));
    }

    #[test]
    fn missing_role_is_tolerated_but_blank_token_is_not() {
        let ctx = SessionContext::in_memory();
        ctx.write(&Session {
            role_id: None,
            ..session()
        })
        .unwrap();
        assert_eq!(ctx.role_id(), None);
        assert!(ctx.read().is_some());

        ctx.write(&Session {
            token: "  ".into(),
            ..session()
        })
        .unwrap();
        assert!(ctx.read().is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_keeps_the_session() {
        let ctx = SessionContext::browser();
        ctx.write(&Session {
            token: "browser-token".into(),
            user_id: 3,
            role_id: Some(2),
        })
        .unwrap();
        assert_eq!(SessionContext::browser().token().as_deref(), Some("browser-token"));
        ctx.clear();
        assert!(SessionContext::browser().read().is_none());
    }
}
