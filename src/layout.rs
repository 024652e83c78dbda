// SPDX-License-Identifier: FSL-1.1
use crate::{Accessor, Error, Store};

/// name of the control entry whose presence marks an initialized database
pub const CONTROL_ENTRY: &str = ".control";

/// name of the entry holding the file key
pub const KEY_ENTRY: &str = ".key";

/// extension of per-name IV entries
pub const IV_EXT: &str = ".iv";

/// extension of per-name credential entries
pub const CRED_EXT: &str = ".cred";

/// the IV entry for the name; the empty name gives the database IV `.iv`
pub fn iv_entry(name: &str) -> String {
    format!("{name}{IV_EXT}")
}

/// the credential entry for the name
pub fn cred_entry(name: &str) -> String {
    format!("{name}{CRED_EXT}")
}

/// The set of well-known entries a credential database keeps in the store.
/// Everything is stored with the bytes encoding.
#[derive(Debug)]
pub struct Layout<'a, S: Store> {
    accessor: &'a mut Accessor<S>,
}

impl<'a, S: Store> Layout<'a, S> {
    /// lay the well-known entries over the accessor
    pub fn new(accessor: &'a mut Accessor<S>) -> Self {
        Self { accessor }
    }

    /// true once the control entry has been written
    pub fn check_db_exists(&self) -> Result<bool, Error<S::Error>> {
        self.accessor.check_exists(CONTROL_ENTRY)
    }

    /// true if a credential is stored under the name
    pub fn check_cred_exists(&self, name: &str) -> Result<bool, Error<S::Error>> {
        self.accessor.check_exists(&cred_entry(name))
    }

    /// read the file key
    pub fn read_key(&self) -> Result<Vec<u8>, Error<S::Error>> {
        self.accessor.read_bytes(KEY_ENTRY)
    }

    /// write the file key
    pub fn write_key(&mut self, key: &[u8]) -> Result<(), Error<S::Error>> {
        self.accessor.write_bytes(KEY_ENTRY, key)
    }

    /// read the control entry
    pub fn read_ctrl(&self) -> Result<Vec<u8>, Error<S::Error>> {
        self.accessor.read_bytes(CONTROL_ENTRY)
    }

    /// write the control entry
    pub fn write_ctrl(&mut self, content: &[u8]) -> Result<(), Error<S::Error>> {
        self.accessor.write_bytes(CONTROL_ENTRY, content)
    }

    /// read the IV stored for the name
    pub fn read_iv(&self, name: &str) -> Result<Vec<u8>, Error<S::Error>> {
        self.accessor.read_bytes(&iv_entry(name))
    }

    /// write the IV for the name
    pub fn write_iv(&mut self, name: &str, iv: &[u8]) -> Result<(), Error<S::Error>> {
        self.accessor.write_bytes(&iv_entry(name), iv)
    }

    /// read the credential stored under the name
    pub fn read_cred(&self, name: &str) -> Result<Vec<u8>, Error<S::Error>> {
        self.accessor.read_bytes(&cred_entry(name))
    }

    /// write the credential under the name
    pub fn write_cred(&mut self, name: &str, content: &[u8]) -> Result<(), Error<S::Error>> {
        self.accessor.write_bytes(&cred_entry(name), content)
    }
}
