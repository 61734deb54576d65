//! Data model for the Authorised Individual Filing projection: the raw CRM
//! record, the canonical document tree, condition flags, presence sections,
//! and picklist tables.

pub mod document;
pub mod flags;
pub mod picklist;
pub mod record;
pub mod section;

pub use document::{
    Address, Applicant, Appointment, CanonicalDocument, CitizenshipEntry, Disclosures,
    DisciplinaryDetails, DocumentMeta, EmploymentEntry, Experience, FormerName,
    MandatoryFunctions, OtherLicence, PreviousAddress, RegulatoryHistoryEntry, Residence,
    DOCUMENT_SCHEMA, DOCUMENT_SCHEMA_VERSION,
};
pub use flags::ConditionFlags;
pub use picklist::{FallbackPolicy, PicklistCatalog, PicklistTable};
pub use record::{RawCitizenship, RawEmployment, RawRecord, RawRegulatoryItem};
pub use section::Section;
