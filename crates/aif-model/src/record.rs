//! Raw CRM applicant record as delivered by the external data source.
//!
//! The source system exposes an opaquely-keyed entity with hundreds of
//! arbitrarily named fields. This module replaces that stringly-keyed bag with
//! a typed optional-field record: one required primary key surrounded by
//! `Option` scalars and named sub-collections. Unknown keys are ignored on
//! deserialization, so upstream schema additions never break ingestion.
//!
//! Every coded field is kept as its raw code here; resolution to display
//! labels is the projection engine's job.

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// One applicant record fetched from the CRM.
///
/// Both the canonical camelCase key and the source system's raw API name
/// (`*__c` for custom fields, `*__r` for relationships) are accepted for each
/// field. The record is read-only to the projection engine; ownership stays
/// with the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Primary identifier. The only field the projection refuses to work
    /// without; everything else may be absent.
    #[serde(default, alias = "Id")]
    pub record_id: Option<String>,

    #[serde(default, alias = "Salutation__c")]
    pub salutation_code: Option<String>,
    #[serde(default, alias = "FirstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "LastName")]
    pub last_name: Option<String>,
    #[serde(default, alias = "Former_Name__c")]
    pub former_name: Option<String>,
    #[serde(default, alias = "Date_Of_Birth__c")]
    pub date_of_birth: Option<String>,

    /// Coded answer to "how long at current address" (picklist code).
    #[serde(default, alias = "Residence_Duration__c")]
    pub residence_duration_code: Option<String>,

    // Current residential address.
    #[serde(default, alias = "Address_Line_1__c")]
    pub address_line1: Option<String>,
    #[serde(default, alias = "Address_Line_2__c")]
    pub address_line2: Option<String>,
    #[serde(default, alias = "City__c")]
    pub city: Option<String>,
    #[serde(default, alias = "Postal_Code__c")]
    pub postal_code: Option<String>,
    #[serde(default, alias = "Country__c")]
    pub country_code: Option<String>,

    // Previous residential address, only meaningful when the applicant has
    // been at the current address for less than three years.
    #[serde(default, alias = "Previous_Address_Line_1__c")]
    pub previous_address_line1: Option<String>,
    #[serde(default, alias = "Previous_City__c")]
    pub previous_city: Option<String>,
    #[serde(default, alias = "Previous_Postal_Code__c")]
    pub previous_postal_code: Option<String>,
    #[serde(default, alias = "Previous_Country__c")]
    pub previous_country_code: Option<String>,

    /// True when the appointment is within a representative office.
    #[serde(default, alias = "Rep_Office__c")]
    pub rep_office: Option<bool>,
    #[serde(default, alias = "Mandatory_Function__c")]
    pub mandatory_function_code: Option<String>,

    #[serde(default, alias = "FS_Experience_Start__c")]
    pub experience_start_date: Option<String>,
    #[serde(default, alias = "FS_Experience_Note__c")]
    pub experience_narrative: Option<String>,

    #[serde(default, alias = "Disciplinary_Action__c")]
    pub disciplinary_action_code: Option<String>,
    #[serde(default, alias = "Disciplinary_Regulator__c")]
    pub disciplinary_regulator_code: Option<String>,
    #[serde(default, alias = "Disciplinary_Details__c")]
    pub disciplinary_details: Option<String>,

    #[serde(default, alias = "Other_Licence__c")]
    pub other_licence_code: Option<String>,
    #[serde(default, alias = "Other_Licence_Regulator__c")]
    pub other_licence_regulator_code: Option<String>,
    #[serde(default, alias = "Other_Licence_Number__c")]
    pub other_licence_number: Option<String>,

    #[serde(default, alias = "Politically_Exposed__c")]
    pub politically_exposed: Option<bool>,

    /// Citizenship sub-collection, one element per nationality held.
    #[serde(default, deserialize_with = "lenient_items", alias = "Citizenships__r")]
    pub citizenships: Vec<RawCitizenship>,

    /// Prior authorisations and registrations with other regulators.
    #[serde(
        default,
        deserialize_with = "lenient_items",
        alias = "Regulatory_History__r"
    )]
    pub regulatory_history: Vec<RawRegulatoryItem>,

    /// Employment history sub-collection, most recent first per the source.
    #[serde(
        default,
        deserialize_with = "lenient_items",
        alias = "Employment_History__r"
    )]
    pub employment_history: Vec<RawEmployment>,
}

/// One element of the citizenship sub-collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCitizenship {
    #[serde(default, alias = "Country__c")]
    pub country_code: Option<String>,
    #[serde(default, alias = "Citizen_Since__c")]
    pub since: Option<String>,
    #[serde(default, alias = "Passport_Number__c")]
    pub passport_number: Option<String>,
}

/// One element of the regulatory history sub-collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRegulatoryItem {
    #[serde(default, alias = "Regulator__c")]
    pub regulator_code: Option<String>,
    #[serde(default, alias = "Licence_Status__c")]
    pub licence_status_code: Option<String>,
    #[serde(default, alias = "Reference__c")]
    pub reference: Option<String>,
    #[serde(default, alias = "From_Date__c")]
    pub from_date: Option<String>,
    #[serde(default, alias = "To_Date__c")]
    pub to_date: Option<String>,
}

/// One element of the employment history sub-collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmployment {
    #[serde(default, alias = "Employer__c")]
    pub employer: Option<String>,
    #[serde(default, alias = "Position__c")]
    pub position: Option<String>,
    #[serde(default, alias = "From_Date__c")]
    pub from_date: Option<String>,
    #[serde(default, alias = "To_Date__c")]
    pub to_date: Option<String>,
}

/// Deserializes a sub-collection leniently.
///
/// The source serializes a relationship with zero related records as `null`
/// rather than `[]`, and shape drift occasionally delivers a scalar where an
/// array is expected. All of those arrive here as an empty list; only a
/// well-formed array of items produces entries.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Items(Vec<T>),
        Other(IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Items(items) => items,
        Lenient::Other(_) => Vec::new(),
    })
}
