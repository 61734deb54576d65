//! Canonical filing document: the hierarchical output of the projection.
//!
//! The shape is a fixed, versioned tree understood by the external template
//! renderer. Every conditional region is a [`Section`], serialized as either a
//! fully-populated object or `null`; every repeating region is a list, never
//! `null`; every coded scalar carries its resolved display label unless the
//! field is documented as a raw passthrough.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Schema identifier stamped into every document.
pub const DOCUMENT_SCHEMA: &str = "aif-filing-document";
/// Schema version; bump when the tree shape changes so renderers can detect
/// drift.
pub const DOCUMENT_SCHEMA_VERSION: u32 = 1;

/// The canonical filing document handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalDocument {
    pub meta: DocumentMeta,
    pub applicant: Applicant,
    pub residence: Residence,
    pub appointment: Appointment,
    pub experience: Experience,
    pub disclosures: Disclosures,
    pub citizenships: Vec<CitizenshipEntry>,
    pub regulatory_history: Vec<RegulatoryHistoryEntry>,
    pub employment_history: Vec<EmploymentEntry>,
}

/// Generation metadata and format marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    pub schema: String,
    pub schema_version: u32,
    /// When the projection ran; the single injected side effect.
    pub generated_at: DateTime<Utc>,
    /// Primary identifier carried over from the raw record.
    pub record_id: String,
}

/// Applicant identity block; always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    /// Resolved salutation label (empty when no salutation was coded).
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    /// Populated only when the applicant has a former name on record.
    pub former_name: Section<FormerName>,
}

/// Former name details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormerName {
    pub name: String,
}

/// Residential address block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Residence {
    pub current: Address,
    /// Present only when the applicant has been at the current address for
    /// less than three years.
    pub previous_address: Section<PreviousAddress>,
}

/// A current address. Individual lines are independently optional; this is
/// ordinary field-by-field nullability, not a flag-gated group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    /// Resolved country label.
    pub country: String,
}

/// The previous address section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousAddress {
    pub line1: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    /// Resolved country label.
    pub country: String,
}

/// Appointment block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub rep_office: bool,
    /// Present only when the mandatory-function question applies: not a rep
    /// office appointment, a choice was made, and the choice is not the
    /// excluded "none of the above" code.
    pub mandatory_functions: Section<MandatoryFunctions>,
}

/// Mandatory function details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryFunctions {
    /// Resolved function label.
    pub function: String,
    /// Raw code passthrough for downstream cross-referencing.
    pub code: String,
}

/// Financial services experience: a mutually exclusive pair.
///
/// Exactly one of `started_on` and `narrative` is non-null, selected by the
/// experience-start-known flag. Never both, never neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Concrete start date, populated when the start date is known.
    pub started_on: Option<String>,
    /// Free-text explanation, populated when it is not.
    pub narrative: Option<String>,
}

/// Disclosure block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disclosures {
    pub disciplinary: Section<DisciplinaryDetails>,
    pub other_licence: Section<OtherLicence>,
    pub politically_exposed: bool,
}

/// Details of a disclosed disciplinary action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinaryDetails {
    /// Resolved regulator label.
    pub regulator: String,
    pub details: String,
}

/// Details of a licence held with another regulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherLicence {
    /// Resolved regulator label.
    pub regulator: String,
    pub licence_number: String,
}

/// One mapped citizenship, 1:1 with a raw sub-array element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenshipEntry {
    /// Resolved country label.
    pub country: String,
    pub since: Option<String>,
}

/// One mapped regulatory history item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryHistoryEntry {
    /// Resolved regulator label.
    pub regulator: String,
    /// Resolved licence status label.
    pub licence_status: String,
    pub reference: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

/// One mapped employment history item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentEntry {
    pub employer: String,
    pub position: String,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}
