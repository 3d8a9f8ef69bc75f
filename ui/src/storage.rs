//! Browser storage backing the session store.

use sidebar::SessionStore;
use web_sys::Storage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no browser window")]
    NoWindow,
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    #[error("storage call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for StorageError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{err:?}"))
    }
}

#[derive(Debug, Clone, Copy)]
enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    fn name(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }

    fn open(self) -> Result<Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::NoWindow)?;
        let storage = match self {
            Self::Local => window.local_storage()?,
            Self::Session => window.session_storage()?,
        };
        storage.ok_or(StorageError::Unavailable(self.name()))
    }

    fn clear(self) -> Result<(), StorageError> {
        Ok(self.open()?.clear()?)
    }
}

/// Persisted session data lives in `localStorage`, with a few per-tab values
/// in `sessionStorage`. Logout wipes both.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn clear_all(&self) {
        for area in [StorageArea::Local, StorageArea::Session] {
            if let Err(e) = area.clear() {
                tracing::warn!("could not clear {}: {e}", area.name());
            }
        }
    }
}
