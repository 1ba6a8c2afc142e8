//! Session lookup for the signed-in user.
//!
//! The login flow owns the session and writes it to `localStorage`. Views only
//! read it, through a [`SessionProvider`] handed to them as context.

use std::cell::RefCell;

use crate::types::Session;

pub trait SessionProvider {
    /// Synchronous local lookup, never a network call.
    fn current_session(&self) -> Option<Session>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("stored session is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<wasm_bindgen::JsValue> for SessionError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SessionError::StorageUnavailable(format!("{value:?}"))
    }
}

/// Reads the session JSON stored by the login flow in `window.localStorage`.
pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn read(&self) -> Result<Option<Session>, SessionError> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::StorageUnavailable("no window".to_string()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| SessionError::StorageUnavailable("localStorage disabled".to_string()))?;

        match storage.get_item(&self.key)? {
            Some(raw) => decode_session(&raw),
            None => Ok(None),
        }
    }
}

impl SessionProvider for BrowserSessionStore {
    fn current_session(&self) -> Option<Session> {
        match self.read() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "ignoring unreadable session");
                None
            }
        }
    }
}

/// Empty or `null` values count as signed out.
pub fn decode_session(raw: &str) -> Result<Option<Session>, SessionError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(raw)?))
}

/// Session held in memory, for tests and non-browser shells.
#[derive(Default)]
pub struct InMemorySessionStore {
    session: RefCell<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session: RefCell::new(session),
        }
    }

    pub fn signed_in(session: Session) -> Self {
        Self::new(Some(session))
    }

    pub fn replace(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session;
    }
}

impl SessionProvider for InMemorySessionStore {
    fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }
}
