//! Projection execution context.
//!
//! Carries the read-only picklist catalog and the clock, the one injected
//! side effect. Everything else in a projection is pure, so two contexts with
//! the same catalog and a fixed clock produce byte-identical documents.

use aif_model::picklist::PicklistCatalog;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Source of the generation timestamp.
pub type Clock = fn() -> DateTime<Utc>;

/// Runtime context for one or more projections.
///
/// Cheap to construct per request; the catalog behind it is process-wide and
/// never mutated after bootstrap, so contexts can be used concurrently
/// without coordination.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionContext<'a> {
    catalog: &'a PicklistCatalog,
    clock: Clock,
}

impl<'a> ProjectionContext<'a> {
    /// Creates a context over a loaded catalog, reading the real clock.
    pub fn new(catalog: &'a PicklistCatalog) -> Self {
        Self {
            catalog,
            clock: Utc::now,
        }
    }

    /// Replaces the clock; tests use this to pin the generation timestamp.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Reads the clock.
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// The catalog this context resolves against.
    pub fn catalog(&self) -> &'a PicklistCatalog {
        self.catalog
    }

    /// Resolves a coded value against a named table.
    ///
    /// An unknown or blank code takes the table's own fallback policy. A
    /// table missing from the catalog entirely resolves to the empty string
    /// regardless of the policy that family would normally declare: the
    /// policy lives in the table, and there is no table to consult. Both
    /// gaps are reported through diagnostics only, never as errors.
    pub fn resolve(&self, table: &str, code: Option<&str>) -> String {
        let Some(picklist) = self.catalog.get(table) else {
            warn!(table, "picklist table not loaded, emitting empty label");
            return String::new();
        };
        if let Some(raw) = code
            && !raw.trim().is_empty()
            && picklist.lookup(Some(raw)).is_none()
        {
            debug!(table, code = raw, "unresolved picklist code, using table fallback");
        }
        picklist.resolve(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aif_model::picklist::{FallbackPolicy, PicklistTable};
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn injected_clock_drives_now() {
        let catalog = PicklistCatalog::new();
        let ctx = ProjectionContext::new(&catalog).with_clock(fixed_clock);
        assert_eq!(ctx.now(), fixed_clock());
    }

    #[test]
    fn missing_table_resolves_to_empty() {
        // Other loaded tables' fallback policies are not consulted; the
        // country family's "Unknown country" label lives in the country
        // table, which is the thing that is absent here.
        let mut catalog = PicklistCatalog::new();
        let mut regulator = PicklistTable::new(
            "regulator",
            FallbackPolicy::Label {
                label: "Unknown regulator".to_string(),
            },
        );
        regulator.add_term("10", "Dubai Financial Services Authority");
        catalog.add_table(regulator);

        let ctx = ProjectionContext::new(&catalog);
        assert_eq!(ctx.resolve("country", Some("241")), "");
        assert_eq!(ctx.resolve("country", None), "");
    }

    #[test]
    fn resolution_uses_table_fallback() {
        let mut catalog = PicklistCatalog::new();
        let mut table = PicklistTable::new(
            "country",
            FallbackPolicy::Label {
                label: "Unknown country".to_string(),
            },
        );
        table.add_term("241", "United Arab Emirates");
        catalog.add_table(table);

        let ctx = ProjectionContext::new(&catalog);
        assert_eq!(ctx.resolve("country", Some("241")), "United Arab Emirates");
        assert_eq!(ctx.resolve("country", Some("7")), "Unknown country");
        assert_eq!(ctx.resolve("country", None), "Unknown country");
    }
}
