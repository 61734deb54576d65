//! Condition flags derived once per raw record.
//!
//! A flag set is a flat name-to-bool mapping. Every value is a pure function
//! of the raw record's fields; the derivation rules themselves live in the
//! projection crate so this type stays a dumb, enumerable container.

use std::collections::BTreeMap;

use serde::Serialize;

/// Well-known flag names.
///
/// Kept as constants rather than an enum so the rule table in the projection
/// crate and tests can enumerate the flag set as data.
pub mod flag {
    /// Applicant has lived at the current address for under three years.
    pub const RESIDENCE_LESS_THAN_THREE_YEARS: &str = "residence_less_than_three_years";
    /// Appointment is within a representative office.
    pub const IS_REP_OFFICE: &str = "is_rep_office";
    /// A mandatory function choice has been made (any choice, including the
    /// "none of the above" code).
    pub const MANDATORY_FUNCTION_SELECTED: &str = "mandatory_function_selected";
    /// Applicant has a former name on record.
    pub const HAS_FORMER_NAME: &str = "has_former_name";
    /// Financial services experience start date is known.
    pub const EXPERIENCE_START_KNOWN: &str = "experience_start_known";
    /// Regulatory history sub-collection is non-empty.
    pub const HAS_REGULATORY_HISTORY: &str = "has_regulatory_history";
    /// Applicant disclosed a past disciplinary action.
    pub const HAS_DISCIPLINARY_HISTORY: &str = "has_disciplinary_history";
    /// Applicant holds a licence with another regulator.
    pub const HOLDS_OTHER_LICENCE: &str = "holds_other_licence";
    /// Applicant is a politically exposed person.
    pub const IS_POLITICALLY_EXPOSED: &str = "is_politically_exposed";
    /// Employment history sub-collection is non-empty.
    pub const HAS_EMPLOYMENT_HISTORY: &str = "has_employment_history";
}

/// Flat mapping from flag name to boolean, computed once per record.
///
/// Lookup of a name that was never derived returns `false` rather than
/// panicking; absence of a flag and a false flag are indistinguishable by
/// design, matching how missing raw fields evaluate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConditionFlags {
    values: BTreeMap<&'static str, bool>,
}

impl ConditionFlags {
    /// Builds a flag set from `(name, value)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, bool)>) -> Self {
        Self {
            values: entries.into_iter().collect(),
        }
    }

    /// Returns the value of a flag, `false` when the name is unknown.
    pub fn get(&self, name: &str) -> bool {
        self.values.get(name).copied().unwrap_or(false)
    }

    /// Iterates over all derived flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }

    /// Number of derived flags.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no flags have been derived.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn residence_less_than_three_years(&self) -> bool {
        self.get(flag::RESIDENCE_LESS_THAN_THREE_YEARS)
    }

    pub fn is_rep_office(&self) -> bool {
        self.get(flag::IS_REP_OFFICE)
    }

    pub fn mandatory_function_selected(&self) -> bool {
        self.get(flag::MANDATORY_FUNCTION_SELECTED)
    }

    pub fn has_former_name(&self) -> bool {
        self.get(flag::HAS_FORMER_NAME)
    }

    pub fn experience_start_known(&self) -> bool {
        self.get(flag::EXPERIENCE_START_KNOWN)
    }

    pub fn has_regulatory_history(&self) -> bool {
        self.get(flag::HAS_REGULATORY_HISTORY)
    }

    pub fn has_disciplinary_history(&self) -> bool {
        self.get(flag::HAS_DISCIPLINARY_HISTORY)
    }

    pub fn holds_other_licence(&self) -> bool {
        self.get(flag::HOLDS_OTHER_LICENCE)
    }

    pub fn is_politically_exposed(&self) -> bool {
        self.get(flag::IS_POLITICALLY_EXPOSED)
    }

    pub fn has_employment_history(&self) -> bool {
        self.get(flag::HAS_EMPLOYMENT_HISTORY)
    }
}
