// SPDX-License-Identifier: FSL-1.1
use std::fmt;

/// The two ways a payload can be laid out in the store. The encodings are not
/// compatible with each other: text written with [`Encoding::Text`] is not
/// readable as [`Encoding::Bytes`] unless it happens to be a JSON byte array.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Encoding {
    /// Bytes stored as a JSON array of integers 0-255, e.g. `[1,2,3]`
    Bytes,
    /// Text stored as-is
    Text,
}

impl Encoding {
    /// decode the raw stored string into a payload of this encoding
    pub fn decode(&self, raw: String) -> Result<Payload, serde_json::Error> {
        match self {
            Encoding::Bytes => decode_bytes(&raw).map(Payload::Bytes),
            Encoding::Text => Ok(Payload::Text(raw)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Encoding::Bytes => f.write_str("bytes"),
            Encoding::Text => f.write_str("text"),
        }
    }
}

/// A decoded payload tagged with its encoding
#[derive(Clone, PartialEq)]
pub enum Payload {
    /// A binary payload
    Bytes(Vec<u8>),
    /// A text payload
    Text(String),
}

impl Payload {
    /// the encoding this payload is stored with
    pub fn encoding(&self) -> Encoding {
        match self {
            Payload::Bytes(_) => Encoding::Bytes,
            Payload::Text(_) => Encoding::Text,
        }
    }

    /// produce the string that goes into the store
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        match self {
            Payload::Bytes(b) => encode_bytes(b),
            Payload::Text(s) => Ok(s.clone()),
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Payload::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            Payload::Text(s) => write!(f, "Text({} bytes)", s.len()),
        }
    }
}

impl From<&[u8]> for Payload {
    fn from(b: &[u8]) -> Self {
        Payload::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Bytes(b)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

/// Encode bytes as a compact JSON integer array
pub fn encode_bytes(bytes: &[u8]) -> Result<String, serde_json::Error> {
    serde_json::to_string(bytes)
}

/// Decode a JSON integer array back into bytes. Every element must be an
/// integer in 0..=255.
pub fn decode_bytes(raw: &str) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::from_str(raw)
}
