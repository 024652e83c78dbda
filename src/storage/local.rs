// SPDX-License-Identifier: FSL-1.1
use crate::Store;
use log::debug;
use wasm_bindgen::JsValue;

/// Errors raised by the browser storage
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LocalStorageError {
    /// No window, or the window refused to hand out localStorage
    #[error("localStorage is unavailable")]
    Unavailable,
    /// A JS exception, e.g. QuotaExceededError from setItem
    #[error("localStorage error: {0}")]
    Js(String),
}

impl From<JsValue> for LocalStorageError {
    fn from(v: JsValue) -> Self {
        LocalStorageError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}

/// A [`Store`] over `window.localStorage`
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// get a handle to the current window's localStorage
    pub fn new() -> Result<Self, LocalStorageError> {
        let window = web_sys::window().ok_or(LocalStorageError::Unavailable)?;
        let storage = window
            .local_storage()?
            .ok_or(LocalStorageError::Unavailable)?;
        debug!("acquired localStorage handle");
        Ok(Self { storage })
    }

    /// wrap an existing storage object, e.g. sessionStorage
    pub fn from_storage(storage: web_sys::Storage) -> Self {
        Self { storage }
    }
}

impl Store for LocalStorage {
    type Error = LocalStorageError;

    fn set(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        Ok(self.storage.set_item(name, value)?)
    }

    fn get(&self, name: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.storage.get_item(name)?)
    }
}
