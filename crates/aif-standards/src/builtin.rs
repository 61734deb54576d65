#![deny(unsafe_code)]

//! Builtin picklist pack embedded at compile time.
//!
//! The projection engine must be usable with zero external configuration, so
//! a default pack ships inside the binary. It is parsed once on first access
//! and served read-only for the life of the process; concurrent first-callers
//! are serialized by the [`OnceLock`] barrier.

use std::path::Path;
use std::sync::OnceLock;

use aif_model::picklist::PicklistCatalog;

use crate::pack::parse_pack;

const BUILTIN_PACK: &str = include_str!("../assets/builtin.toml");

static BUILTIN: OnceLock<PicklistCatalog> = OnceLock::new();

/// Returns the process-wide builtin catalog, loading it on first use.
///
/// # Panics
///
/// Panics if the embedded pack data is malformed, which is a build defect
/// rather than a runtime condition; a test exercises the parse.
pub fn builtin_catalog() -> &'static PicklistCatalog {
    BUILTIN.get_or_init(|| {
        let tables = parse_pack(BUILTIN_PACK, Path::new("<builtin>"))
            .expect("embedded builtin picklist pack parses");
        let mut catalog = PicklistCatalog::new();
        for table in tables {
            catalog.add_table(table);
        }
        catalog
    })
}
