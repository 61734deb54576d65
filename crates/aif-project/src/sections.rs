//! Section composers for the canonical document.
//!
//! Each composer builds one region of the output tree from the raw record,
//! the derived condition flags, and the picklist catalog. Flag-gated regions
//! go through [`Section::from_flag`], so an absent section never carries
//! partially-built data and its builder never runs.

use aif_model::document::{
    Address, Applicant, Appointment, CitizenshipEntry, Disclosures, DisciplinaryDetails,
    EmploymentEntry, Experience, FormerName, MandatoryFunctions, OtherLicence, PreviousAddress,
    RegulatoryHistoryEntry, Residence,
};
use aif_model::flags::ConditionFlags;
use aif_model::picklist::{normalize_code, tables};
use aif_model::record::{RawCitizenship, RawEmployment, RawRecord, RawRegulatoryItem};
use aif_model::section::Section;

use crate::context::ProjectionContext;
use crate::flags::codes;

/// Derived flag: whether the mandatory-function question applies.
///
/// Computed from another flag plus raw fields: the appointment is not within
/// a representative office, a choice was made, and the choice is not the
/// excluded "none of the above" code. Kept as its own named value so the rule
/// is independently testable rather than buried in a consumer.
pub fn shows_mandatory_functions(record: &RawRecord, flags: &ConditionFlags) -> bool {
    if flags.is_rep_office() || !flags.mandatory_function_selected() {
        return false;
    }
    record
        .mandatory_function_code
        .as_deref()
        .is_some_and(|code| normalize_code(code) != normalize_code(codes::MANDATORY_FUNCTION_NONE))
}

/// Applicant identity block; always present.
pub fn applicant(
    record: &RawRecord,
    flags: &ConditionFlags,
    ctx: &ProjectionContext<'_>,
) -> Applicant {
    Applicant {
        salutation: ctx.resolve(tables::SALUTATION, record.salutation_code.as_deref()),
        first_name: trimmed(record.first_name.as_deref()),
        last_name: trimmed(record.last_name.as_deref()),
        former_name: Section::from_flag(flags.has_former_name(), || FormerName {
            name: trimmed(record.former_name.as_deref()),
        }),
    }
}

/// Residence block: current address plus the flag-gated previous address.
pub fn residence(
    record: &RawRecord,
    flags: &ConditionFlags,
    ctx: &ProjectionContext<'_>,
) -> Residence {
    Residence {
        current: Address {
            line1: record.address_line1.clone(),
            line2: record.address_line2.clone(),
            city: record.city.clone(),
            postal_code: record.postal_code.clone(),
            country: ctx.resolve(tables::COUNTRY, record.country_code.as_deref()),
        },
        previous_address: Section::from_flag(flags.residence_less_than_three_years(), || {
            PreviousAddress {
                line1: record.previous_address_line1.clone(),
                city: record.previous_city.clone(),
                postal_code: record.previous_postal_code.clone(),
                country: ctx.resolve(tables::COUNTRY, record.previous_country_code.as_deref()),
            }
        }),
    }
}

/// Appointment block with the nested derived flag.
pub fn appointment(
    record: &RawRecord,
    flags: &ConditionFlags,
    ctx: &ProjectionContext<'_>,
) -> Appointment {
    Appointment {
        rep_office: flags.is_rep_office(),
        mandatory_functions: Section::from_flag(shows_mandatory_functions(record, flags), || {
            MandatoryFunctions {
                function: ctx.resolve(
                    tables::MANDATORY_FUNCTION,
                    record.mandatory_function_code.as_deref(),
                ),
                code: trimmed(record.mandatory_function_code.as_deref()),
            }
        }),
    }
}

/// Experience block: the mutually exclusive pair.
///
/// Both branches are decided here in one place so exactly one of the date and
/// the narrative is ever non-null in the output, never both, never neither.
pub fn experience(record: &RawRecord, flags: &ConditionFlags) -> Experience {
    if flags.experience_start_known() {
        Experience {
            started_on: Some(trimmed(record.experience_start_date.as_deref())),
            narrative: None,
        }
    } else {
        Experience {
            started_on: None,
            narrative: Some(trimmed(record.experience_narrative.as_deref())),
        }
    }
}

/// Disclosure block: two flag-gated sections and a boolean passthrough.
pub fn disclosures(
    record: &RawRecord,
    flags: &ConditionFlags,
    ctx: &ProjectionContext<'_>,
) -> Disclosures {
    Disclosures {
        disciplinary: Section::from_flag(flags.has_disciplinary_history(), || {
            DisciplinaryDetails {
                regulator: ctx.resolve(
                    tables::REGULATOR,
                    record.disciplinary_regulator_code.as_deref(),
                ),
                details: trimmed(record.disciplinary_details.as_deref()),
            }
        }),
        other_licence: Section::from_flag(flags.holds_other_licence(), || OtherLicence {
            regulator: ctx.resolve(
                tables::REGULATOR,
                record.other_licence_regulator_code.as_deref(),
            ),
            licence_number: trimmed(record.other_licence_number.as_deref()),
        }),
        politically_exposed: flags.is_politically_exposed(),
    }
}

/// Maps one citizenship sub-record.
pub fn citizenship_entry(raw: &RawCitizenship, ctx: &ProjectionContext<'_>) -> CitizenshipEntry {
    CitizenshipEntry {
        country: ctx.resolve(tables::COUNTRY, raw.country_code.as_deref()),
        since: raw.since.clone(),
    }
}

/// Maps one regulatory history sub-record.
pub fn regulatory_history_entry(
    raw: &RawRegulatoryItem,
    ctx: &ProjectionContext<'_>,
) -> RegulatoryHistoryEntry {
    RegulatoryHistoryEntry {
        regulator: ctx.resolve(tables::REGULATOR, raw.regulator_code.as_deref()),
        licence_status: ctx.resolve(tables::LICENCE_STATUS, raw.licence_status_code.as_deref()),
        reference: raw.reference.clone(),
        from_date: raw.from_date.clone(),
        to_date: raw.to_date.clone(),
    }
}

/// Maps one employment history sub-record.
pub fn employment_entry(raw: &RawEmployment) -> EmploymentEntry {
    EmploymentEntry {
        employer: trimmed(raw.employer.as_deref()),
        position: trimmed(raw.position.as_deref()),
        from_date: raw.from_date.clone(),
        to_date: raw.to_date.clone(),
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
