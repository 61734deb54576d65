//! Presence type for flag-gated output sections.
//!
//! A conditional region of the canonical document is either fully populated
//! or absent; there is no partially-built state. Modeling that as a sum type
//! (rather than `Option` checked ad hoc at call sites) means no code path can
//! read a field of an absent section, and the serialized form is exactly what
//! the renderer contract requires: the section object, or JSON `null`.

use serde::{Deserialize, Serialize};

/// A flag-gated section of the canonical document.
///
/// Serializes as the inner value when present and as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section<T> {
    /// Section is populated; its governing flag was true.
    Present(T),
    /// Section is intentionally absent; its governing flag was false.
    Absent,
}

impl<T> Section<T> {
    /// Builds a section from its governing flag.
    ///
    /// The builder runs only when the flag is true, so inputs that are
    /// semantically invalid while the flag is false are never touched.
    pub fn from_flag(flag: bool, builder: impl FnOnce() -> T) -> Self {
        if flag {
            Self::Present(builder())
        } else {
            Self::Absent
        }
    }

    /// True when the section is populated.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the inner value when present.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Maps the inner value, preserving absence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Section<U> {
        match self {
            Self::Present(value) => Section::Present(f(value)),
            Self::Absent => Section::Absent,
        }
    }
}

impl<T> From<Option<T>> for Section<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::Present(inner),
            None => Self::Absent,
        }
    }
}
