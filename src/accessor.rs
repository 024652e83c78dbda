// SPDX-License-Identifier: FSL-1.1
use crate::{
    codec::{decode_bytes, encode_bytes, Payload},
    Encoding, Error, Store,
};
use log::{debug, warn};

/// Reads and writes named payloads against an injected [`Store`]. Every
/// operation is a single pass-through call; nothing is cached here.
#[derive(Clone, Debug, Default)]
pub struct Accessor<S: Store> {
    store: S,
}

impl<S: Store> Accessor<S> {
    /// create an accessor over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// the underlying store, mutably
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Persist bytes under the name as a JSON integer array, overwriting any
    /// previous value
    pub fn write_bytes(&mut self, name: &str, content: &[u8]) -> Result<(), Error<S::Error>> {
        let encoded = encode_bytes(content).map_err(Error::Encode)?;
        self.set(name, &encoded)
    }

    /// Read the bytes stored under the name. A name that was never written is
    /// [`Error::NotFound`].
    pub fn read_bytes(&self, name: &str) -> Result<Vec<u8>, Error<S::Error>> {
        let raw = self.get(name)?.ok_or_else(|| Error::NotFound(name.to_string()))?;
        decode_bytes(&raw).map_err(|e| undecodable(name, e))
    }

    /// True if the store holds a value for the name
    pub fn check_exists(&self, name: &str) -> Result<bool, Error<S::Error>> {
        Ok(self.get(name)?.is_some())
    }

    /// Persist text under the name unchanged, overwriting any previous value
    pub fn write_text(&mut self, name: &str, content: &str) -> Result<(), Error<S::Error>> {
        self.set(name, content)
    }

    /// Read the text stored under the name exactly as the store returns it
    pub fn read_text(&self, name: &str) -> Result<Option<String>, Error<S::Error>> {
        self.get(name)
    }

    /// Persist a tagged payload with its own encoding
    pub fn write_info(&mut self, name: &str, payload: &Payload) -> Result<(), Error<S::Error>> {
        let encoded = payload.encode().map_err(Error::Encode)?;
        self.set(name, &encoded)
    }

    /// Read a payload with the given encoding. A missing name is `Ok(None)`
    /// for [`Encoding::Text`] and [`Error::NotFound`] for [`Encoding::Bytes`].
    pub fn read_info(
        &self,
        name: &str,
        encoding: Encoding,
    ) -> Result<Option<Payload>, Error<S::Error>> {
        match (self.get(name)?, encoding) {
            (Some(raw), _) => encoding
                .decode(raw)
                .map(Some)
                .map_err(|e| undecodable(name, e)),
            (None, Encoding::Bytes) => Err(Error::NotFound(name.to_string())),
            (None, Encoding::Text) => Ok(None),
        }
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), Error<S::Error>> {
        debug!("set({name}) -> {} bytes", value.len());
        self.store.set(name, value).map_err(Error::store)
    }

    fn get(&self, name: &str) -> Result<Option<String>, Error<S::Error>> {
        let value = self.store.get(name).map_err(Error::store)?;
        match &value {
            Some(v) => debug!("get({name}) -> {} bytes", v.len()),
            None => debug!("get({name}) -> absent"),
        }
        Ok(value)
    }
}

fn undecodable<E>(name: &str, e: serde_json::Error) -> Error<E>
where
    E: std::error::Error + 'static,
{
    warn!("{name} -> undecodable value: {e}");
    Error::Decode(e)
}

impl<S: Store> From<S> for Accessor<S> {
    fn from(store: S) -> Self {
        Self::new(store)
    }
}
