#![deny(unsafe_code)]

//! Content pins for pack files.

use std::fmt;

use sha2::{Digest, Sha256};

/// A manifest content pin: the sha256 of one pack file, held as 64 lowercase
/// hex characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sha256Pin(String);

impl Sha256Pin {
    /// Parses a pin from its manifest rendering. Hex case is accepted;
    /// anything that is not exactly 64 hex characters is not a pin.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.len() == 64 && normalized.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(normalized))
        } else {
            None
        }
    }

    /// Pins the given file contents.
    pub fn of(bytes: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(bytes)))
    }

    /// True when the contents hash to this pin.
    pub fn matches(&self, bytes: &[u8]) -> bool {
        self == &Self::of(bytes)
    }
}

impl fmt::Display for Sha256Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
