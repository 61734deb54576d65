//! Condition flag derivation.
//!
//! The business rule set is expressed as an enumerable table of
//! `(flag name, predicate)` pairs rather than one ad hoc boolean expression
//! block, so every rule is individually unit-testable and the full set can be
//! walked as data.
//!
//! Every predicate is a pure function of documented raw fields: an equality
//! check against a coded sentinel, a boolean identity check, or an array
//! non-emptiness check. Missing or null inputs evaluate to `false`; the
//! derivation is total over all record shapes and never errors.

use aif_model::flags::{flag, ConditionFlags};
use aif_model::picklist::normalize_code;
use aif_model::record::RawRecord;

/// Coded sentinel values the flag predicates compare against.
pub mod codes {
    /// Residence-duration picklist code for "Less than 3 years".
    pub const RESIDENCE_LESS_THAN_THREE_YEARS: &str = "1";
    /// Residence-duration picklist code for "3 years or more".
    pub const RESIDENCE_THREE_YEARS_OR_MORE: &str = "2";
    /// Mandatory-function picklist code for "None of the above"; excluded
    /// from the mandatory-functions section.
    pub const MANDATORY_FUNCTION_NONE: &str = "99";
    /// "Yes" code shared by the coded disclosure questions.
    pub const DISCLOSURE_YES: &str = "1";
}

/// One row of the flag rule table.
pub struct FlagRule {
    /// Flag name as consumed by the section composers.
    pub name: &'static str,
    /// Predicate over the raw record.
    pub predicate: fn(&RawRecord) -> bool,
}

/// The complete flag rule set, in derivation order.
pub const FLAG_RULES: &[FlagRule] = &[
    FlagRule {
        name: flag::RESIDENCE_LESS_THAN_THREE_YEARS,
        predicate: residence_less_than_three_years,
    },
    FlagRule {
        name: flag::IS_REP_OFFICE,
        predicate: is_rep_office,
    },
    FlagRule {
        name: flag::MANDATORY_FUNCTION_SELECTED,
        predicate: mandatory_function_selected,
    },
    FlagRule {
        name: flag::HAS_FORMER_NAME,
        predicate: has_former_name,
    },
    FlagRule {
        name: flag::EXPERIENCE_START_KNOWN,
        predicate: experience_start_known,
    },
    FlagRule {
        name: flag::HAS_REGULATORY_HISTORY,
        predicate: has_regulatory_history,
    },
    FlagRule {
        name: flag::HAS_DISCIPLINARY_HISTORY,
        predicate: has_disciplinary_history,
    },
    FlagRule {
        name: flag::HOLDS_OTHER_LICENCE,
        predicate: holds_other_licence,
    },
    FlagRule {
        name: flag::IS_POLITICALLY_EXPOSED,
        predicate: is_politically_exposed,
    },
    FlagRule {
        name: flag::HAS_EMPLOYMENT_HISTORY,
        predicate: has_employment_history,
    },
];

/// Derives the full condition flag set for one record.
///
/// Idempotent: two calls on the same record produce identical flag sets.
pub fn derive_flags(record: &RawRecord) -> ConditionFlags {
    ConditionFlags::from_entries(
        FLAG_RULES
            .iter()
            .map(|rule| (rule.name, (rule.predicate)(record))),
    )
}

fn residence_less_than_three_years(record: &RawRecord) -> bool {
    code_equals(
        record.residence_duration_code.as_deref(),
        codes::RESIDENCE_LESS_THAN_THREE_YEARS,
    )
}

fn is_rep_office(record: &RawRecord) -> bool {
    record.rep_office == Some(true)
}

fn mandatory_function_selected(record: &RawRecord) -> bool {
    is_set(record.mandatory_function_code.as_deref())
}

fn has_former_name(record: &RawRecord) -> bool {
    is_set(record.former_name.as_deref())
}

fn experience_start_known(record: &RawRecord) -> bool {
    is_set(record.experience_start_date.as_deref())
}

fn has_regulatory_history(record: &RawRecord) -> bool {
    !record.regulatory_history.is_empty()
}

fn has_disciplinary_history(record: &RawRecord) -> bool {
    code_equals(
        record.disciplinary_action_code.as_deref(),
        codes::DISCLOSURE_YES,
    )
}

fn holds_other_licence(record: &RawRecord) -> bool {
    code_equals(record.other_licence_code.as_deref(), codes::DISCLOSURE_YES)
}

fn is_politically_exposed(record: &RawRecord) -> bool {
    record.politically_exposed == Some(true)
}

fn has_employment_history(record: &RawRecord) -> bool {
    !record.employment_history.is_empty()
}

/// True when the field holds the sentinel code, after code normalization.
fn code_equals(value: Option<&str>, sentinel: &str) -> bool {
    value.is_some_and(|raw| normalize_code(raw) == normalize_code(sentinel))
}

/// True when the field is set to a non-blank value.
fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|raw| !raw.trim().is_empty())
}
