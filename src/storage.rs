// SPDX-License-Identifier: FSL-1.1
/// The interface to a string-keyed host store
pub mod store;

/// An in-memory store
pub mod memory;

/// The browser's localStorage
#[cfg(feature = "web")]
pub mod local;

#[cfg(feature = "web")]
pub use local::{LocalStorage, LocalStorageError};
pub use memory::MemoryStore;
pub use store::Store;
