// SPDX-License-Identifier: FSL-1.1

/// Trait to a synchronous, string-keyed persistent store provided by the host
pub trait Store {
    /// Error type raised by the store
    type Error: std::error::Error + 'static;

    /// store the value under the name, replacing whatever was there
    fn set(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;

    /// get the value stored under the name, `None` if there is none
    fn get(&self, name: &str) -> Result<Option<String>, Self::Error>;
}

impl<S: Store + ?Sized> Store for &mut S {
    type Error = S::Error;

    fn set(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(name, value)
    }

    fn get(&self, name: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(name)
    }
}
