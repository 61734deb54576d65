//! Picklist model: coded values and their display labels.
//!
//! Each logical field family (country, salutation, regulator, ...) has one
//! immutable table mapping source codes to human-readable labels. Tables are
//! loaded once at process start by `aif-standards` and shared read-only across
//! concurrent projections.
//!
//! Codes are normalized before lookup so the numeric and string renderings of
//! the same code (`241`, `"241"`, `" 241 "`) are equivalent. Resolution never
//! fails: an unknown or missing code yields the table's configured fallback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known table names used by the projection engine.
pub mod tables {
    pub const COUNTRY: &str = "country";
    pub const SALUTATION: &str = "salutation";
    pub const REGULATOR: &str = "regulator";
    pub const MANDATORY_FUNCTION: &str = "mandatory_function";
    pub const LICENCE_STATUS: &str = "licence_status";
    pub const RESIDENCE_DURATION: &str = "residence_duration";
}

/// What a table returns for a missing or unresolvable code.
///
/// Declared per table in the pack data, not hardcoded in the resolver. The
/// empty string is the right default for most families; a literal label is
/// used where silent omission would mislead the reader (e.g. country).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Unresolved codes become the empty string.
    #[default]
    Empty,
    /// Unresolved codes become a fixed literal label.
    Label {
        /// The literal to emit (e.g. "Unknown country").
        label: String,
    },
}

impl FallbackPolicy {
    /// The label produced for an unresolvable code.
    pub fn fallback_label(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Label { label } => label.clone(),
        }
    }
}

/// An immutable code-to-label mapping for one field family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicklistTable {
    /// Table name (e.g. "country").
    pub name: String,
    /// Fallback behavior for missing/unknown codes.
    pub fallback: FallbackPolicy,
    /// Labels keyed by normalized code.
    terms: BTreeMap<String, String>,
}

impl PicklistTable {
    /// Creates an empty table.
    pub fn new(name: impl Into<String>, fallback: FallbackPolicy) -> Self {
        Self {
            name: name.into(),
            fallback,
            terms: BTreeMap::new(),
        }
    }

    /// Adds a code/label pair. The code is normalized on insert.
    pub fn add_term(&mut self, code: &str, label: impl Into<String>) {
        self.terms.insert(normalize_code(code), label.into());
    }

    /// Resolves a code to its display label.
    ///
    /// `None`, a blank code, and a code absent from the table all produce the
    /// table's fallback. Never panics.
    pub fn resolve(&self, code: Option<&str>) -> String {
        self.lookup(code)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| self.fallback.fallback_label())
    }

    /// Looks up a code, returning `None` when unresolvable instead of the
    /// fallback. Used where callers need to distinguish the two.
    pub fn lookup(&self, code: Option<&str>) -> Option<&str> {
        let raw = code?.trim();
        if raw.is_empty() {
            return None;
        }
        self.terms.get(&normalize_code(raw)).map(String::as_str)
    }

    /// True when the normalized code has a configured label.
    pub fn contains(&self, code: &str) -> bool {
        self.terms.contains_key(&normalize_code(code))
    }

    /// All configured codes, in normalized order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Number of configured terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the table has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A loaded set of picklist tables, keyed by table name.
///
/// Built once at bootstrap, then shared read-only; nothing mutates a catalog
/// after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicklistCatalog {
    tables: BTreeMap<String, PicklistTable>,
}

impl PicklistCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table, replacing any previous table of the same name.
    pub fn add_table(&mut self, table: PicklistTable) {
        self.tables.insert(table.name.clone(), table);
    }

    /// Gets a table by name.
    pub fn get(&self, name: &str) -> Option<&PicklistTable> {
        self.tables.get(name)
    }

    /// Iterates over all tables in name order.
    pub fn iter(&self) -> impl Iterator<Item = &PicklistTable> {
        self.tables.values()
    }

    /// Number of loaded tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when no tables are loaded.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Normalizes a code for lookup.
///
/// Integer-like codes collapse to their canonical integer rendering so the
/// numeric and string forms of the same code compare equal; everything else
/// is trimmed and uppercased.
pub fn normalize_code(code: &str) -> String {
    let trimmed = code.trim();
    match trimmed.parse::<i64>() {
        Ok(number) => number.to_string(),
        Err(_) => trimmed.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_codes_are_equivalent() {
        assert_eq!(normalize_code("241"), normalize_code(" 241 "));
        assert_eq!(normalize_code("007"), "7");
        assert_eq!(normalize_code("seo"), "SEO");
    }

    #[test]
    fn resolve_applies_fallback() {
        let mut table = PicklistTable::new(
            tables::COUNTRY,
            FallbackPolicy::Label {
                label: "Unknown country".to_string(),
            },
        );
        table.add_term("241", "United Arab Emirates");

        assert_eq!(table.resolve(Some("241")), "United Arab Emirates");
        assert_eq!(table.resolve(Some(" 241 ")), "United Arab Emirates");
        assert_eq!(table.resolve(Some("999")), "Unknown country");
        assert_eq!(table.resolve(None), "Unknown country");
        assert_eq!(table.resolve(Some("  ")), "Unknown country");
    }
}
