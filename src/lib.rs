// SPDX-License-Identifier: FSL-1.1
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

//! Scribe

/// Reading and writing named payloads
pub mod accessor;
pub use accessor::Accessor;

/// Payload encodings
pub mod codec;
pub use codec::{Encoding, Payload};

/// Errors produced by this library
pub mod error;
pub use error::Error;

/// Well-known entry names and helpers for them
pub mod layout;
pub use layout::Layout;

/// Storage traits and backends
pub mod storage;
pub use storage::{MemoryStore, Store};

/// ...and in the darkness bind them
pub mod prelude {
    pub use super::*;
    #[cfg(feature = "web")]
    pub use super::storage::LocalStorage;
}
