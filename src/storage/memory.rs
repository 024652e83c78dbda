// SPDX-License-Identifier: FSL-1.1
use crate::Store;
use std::{collections::HashMap, convert::Infallible};

/// A [`Store`] backed by a `HashMap`. Nothing outlives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// the raw stored string for the name
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// true when nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    type Error = Infallible;

    fn set(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(name).cloned())
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MemoryStore {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
