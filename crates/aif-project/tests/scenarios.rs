#![allow(missing_docs)]

//! End-to-end projection scenarios over the builtin picklist pack.

use aif_model::record::{RawCitizenship, RawRecord, RawRegulatoryItem};
use aif_project::{project, ProjectionContext, ProjectionError};
use aif_standards::builtin_catalog;
use chrono::{DateTime, TimeZone, Utc};

fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn ctx() -> ProjectionContext<'static> {
    ProjectionContext::new(builtin_catalog()).with_clock(fixed_clock)
}

fn sample_record() -> RawRecord {
    RawRecord {
        record_id: Some("a0X5g000001LxyZ".to_string()),
        salutation_code: Some("4".to_string()),
        first_name: Some("Leila".to_string()),
        last_name: Some("Haddad".to_string()),
        residence_duration_code: Some("1".to_string()),
        address_line1: Some("Unit 12, Gate Village 7".to_string()),
        city: Some("Dubai".to_string()),
        country_code: Some("241".to_string()),
        previous_address_line1: Some("14 Curzon Street".to_string()),
        previous_city: Some("London".to_string()),
        previous_country_code: Some("231".to_string()),
        rep_office: Some(false),
        mandatory_function_code: Some("3".to_string()),
        experience_start_date: Some("2012-09-01".to_string()),
        citizenships: vec![
            RawCitizenship {
                country_code: Some("241".to_string()),
                since: Some("1990-01-01".to_string()),
                ..RawCitizenship::default()
            },
            RawCitizenship {
                country_code: Some("231".to_string()),
                ..RawCitizenship::default()
            },
        ],
        regulatory_history: vec![RawRegulatoryItem {
            regulator_code: Some("11".to_string()),
            licence_status_code: Some("2".to_string()),
            reference: Some("LH-2241".to_string()),
            from_date: Some("2013-01-15".to_string()),
            to_date: Some("2019-06-30".to_string()),
        }],
        ..RawRecord::default()
    }
}

// Scenario A: short residence opens the previous-address section.
#[test]
fn short_residence_populates_previous_address() {
    let record = sample_record();
    let document = project(&record, &ctx()).expect("project");

    let previous = document
        .residence
        .previous_address
        .as_option()
        .expect("previous address present");
    assert_eq!(previous.line1.as_deref(), Some("14 Curzon Street"));
    assert_eq!(previous.country, "United Kingdom");
}

// Scenario B: the same record with the long-residence code keeps the
// section exactly null.
#[test]
fn long_residence_omits_previous_address() {
    let record = RawRecord {
        residence_duration_code: Some("2".to_string()),
        ..sample_record()
    };
    let document = project(&record, &ctx()).expect("project");
    assert!(!document.residence.previous_address.is_present());

    let json = serde_json::to_value(&document).expect("serialize");
    assert_eq!(
        json["residence"]["previousAddress"],
        serde_json::Value::Null
    );
}

// Scenario C: three citizenships map 1:1, in order, with resolved labels.
#[test]
fn citizenships_map_in_order_with_labels() {
    let mut record = sample_record();
    record.citizenships.push(RawCitizenship {
        country_code: Some("190".to_string()),
        ..RawCitizenship::default()
    });

    let document = project(&record, &ctx()).expect("project");
    assert_eq!(document.citizenships.len(), 3);
    assert_eq!(document.citizenships[0].country, "United Arab Emirates");
    assert_eq!(document.citizenships[1].country, "United Kingdom");
    assert_eq!(document.citizenships[2].country, "Singapore");
}

// Scenario D: absent sub-array projects to an empty list, never null.
#[test]
fn missing_regulatory_history_projects_empty_list() {
    let record = RawRecord {
        regulatory_history: Vec::new(),
        ..sample_record()
    };
    let document = project(&record, &ctx()).expect("project");
    assert!(document.regulatory_history.is_empty());

    let json = serde_json::to_value(&document).expect("serialize");
    assert!(json["regulatoryHistory"].is_array());
    assert_eq!(json["regulatoryHistory"].as_array().unwrap().len(), 0);
}

// Scenario E: no primary identifier, no document.
#[test]
fn missing_record_id_refuses_projection() {
    let record = RawRecord {
        record_id: None,
        ..sample_record()
    };
    let error = project(&record, &ctx()).expect_err("must refuse");
    assert_eq!(error, ProjectionError::MissingRecordId);
}

#[test]
fn projection_is_deterministic() {
    let record = sample_record();
    let first = project(&record, &ctx()).expect("project");
    let second = project(&record, &ctx()).expect("project");
    assert_eq!(first, second);
}

#[test]
fn conditional_presence_tracks_flags() {
    // Former name absent on the sample record.
    let document = project(&sample_record(), &ctx()).expect("project");
    assert!(!document.applicant.former_name.is_present());

    let record = RawRecord {
        former_name: Some("Leila Nasser".to_string()),
        ..sample_record()
    };
    let document = project(&record, &ctx()).expect("project");
    let former = document
        .applicant
        .former_name
        .as_option()
        .expect("former name present");
    assert_eq!(former.name, "Leila Nasser");
}

#[test]
fn mandatory_functions_follow_the_derived_flag() {
    // Sample record: not a rep office, compliance officer selected.
    let document = project(&sample_record(), &ctx()).expect("project");
    let functions = document
        .appointment
        .mandatory_functions
        .as_option()
        .expect("mandatory functions present");
    assert_eq!(functions.function, "Compliance Officer");
    assert_eq!(functions.code, "3");

    // Rep office hides the question no matter the choice.
    let record = RawRecord {
        rep_office: Some(true),
        ..sample_record()
    };
    let document = project(&record, &ctx()).expect("project");
    assert!(!document.appointment.mandatory_functions.is_present());

    // The excluded "none of the above" choice hides it too.
    let record = RawRecord {
        mandatory_function_code: Some("99".to_string()),
        ..sample_record()
    };
    let document = project(&record, &ctx()).expect("project");
    assert!(!document.appointment.mandatory_functions.is_present());
}

#[test]
fn experience_pair_exactly_one_side_in_output() {
    let document = project(&sample_record(), &ctx()).expect("project");
    assert_eq!(
        document.experience.started_on.as_deref(),
        Some("2012-09-01")
    );
    assert!(document.experience.narrative.is_none());

    let record = RawRecord {
        experience_start_date: None,
        experience_narrative: Some("Private banking since the early 2010s".to_string()),
        ..sample_record()
    };
    let document = project(&record, &ctx()).expect("project");
    assert!(document.experience.started_on.is_none());
    assert_eq!(
        document.experience.narrative.as_deref(),
        Some("Private banking since the early 2010s")
    );
}

#[test]
fn regulatory_history_resolves_codes_per_entry() {
    let document = project(&sample_record(), &ctx()).expect("project");
    assert_eq!(document.regulatory_history.len(), 1);
    let entry = &document.regulatory_history[0];
    assert_eq!(entry.regulator, "Financial Conduct Authority");
    assert_eq!(entry.licence_status, "Lapsed");
    assert_eq!(entry.reference.as_deref(), Some("LH-2241"));
}

#[test]
fn unknown_codes_fall_back_per_table_policy() {
    let record = RawRecord {
        country_code: Some("9999".to_string()),
        salutation_code: Some("9999".to_string()),
        ..sample_record()
    };
    let document = project(&record, &ctx()).expect("project");
    assert_eq!(document.residence.current.country, "Unknown country");
    assert_eq!(document.applicant.salutation, "");
}

#[test]
fn meta_carries_schema_and_injected_timestamp() {
    let document = project(&sample_record(), &ctx()).expect("project");
    assert_eq!(document.meta.schema, "aif-filing-document");
    assert_eq!(document.meta.schema_version, 1);
    assert_eq!(document.meta.generated_at, fixed_clock());
    assert_eq!(document.meta.record_id, "a0X5g000001LxyZ");
}
