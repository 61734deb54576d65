#![allow(missing_docs)]

//! End-to-end command tests over fixture records on disk.

use std::fs;
use std::path::PathBuf;

use aif_cli::cli::{PicklistArgs, ProjectArgs, VerifyArgs};
use aif_cli::commands::{run_picklists, run_project, run_verify};
use aif_model::CanonicalDocument;
use aif_standards::hash::Sha256Pin;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "aif-filing-cli-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

// Fixture record using the source system's raw API field names.
const RECORD_JSON: &str = r#"{
  "Id": "a0X5g000001LxyZ",
  "Salutation__c": "4",
  "FirstName": "Leila",
  "LastName": "Haddad",
  "Residence_Duration__c": "1",
  "Address_Line_1__c": "Unit 12, Gate Village 7",
  "City__c": "Dubai",
  "Country__c": "241",
  "Previous_Address_Line_1__c": "14 Curzon Street",
  "Previous_City__c": "London",
  "Previous_Country__c": "231",
  "Rep_Office__c": false,
  "Mandatory_Function__c": "3",
  "FS_Experience_Start__c": "2012-09-01",
  "Citizenships__r": [
    {"Country__c": "241", "Citizen_Since__c": "1990-01-01"},
    {"Country__c": "231"}
  ],
  "Regulatory_History__r": [
    {
      "Regulator__c": "11",
      "Licence_Status__c": "2",
      "Reference__c": "LH-2241",
      "From_Date__c": "2013-01-15",
      "To_Date__c": "2019-06-30"
    }
  ]
}"#;

#[test]
fn project_writes_the_canonical_document() {
    let dir = unique_temp_dir("project");
    let record_path = dir.join("record.json");
    fs::write(&record_path, RECORD_JSON).unwrap();
    let output_path = dir.join("document.json");

    let args = ProjectArgs {
        record: record_path,
        output: Some(output_path.clone()),
        pack_dir: None,
        no_summary: true,
    };
    let result = run_project(&args).expect("project");
    assert_eq!(result.record_id, "a0X5g000001LxyZ");
    assert_eq!(result.output_path.as_deref(), Some(output_path.as_path()));

    let written = fs::read_to_string(&output_path).expect("document written");
    let document: CanonicalDocument = serde_json::from_str(&written).expect("parse document");
    insta::assert_json_snapshot!("written_document", document, {
        ".meta.generatedAt" => "[generated_at]",
    });

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn project_prefers_an_external_pack() {
    let dir = unique_temp_dir("external-pack");
    let pack_dir = dir.join("pack");
    fs::create_dir_all(&pack_dir).unwrap();
    let pack: &[u8] = br#"[pack]
schema = "aif-filing.picklist-pack"
schema_version = 1

[[table]]
name = "country"
fallback = { policy = "label", label = "Unrecognised country" }

[[table.term]]
code = "241"
label = "UAE (Dubai)"
"#;
    fs::write(pack_dir.join("country.toml"), pack).unwrap();
    let manifest = format!(
        "[manifest]\nschema = \"aif-filing.picklist-manifest\"\nschema_version = 1\n\n\
         [[files]]\npath = \"country.toml\"\nsha256 = \"{}\"\nkind = \"toml\"\n",
        Sha256Pin::of(pack)
    );
    fs::write(pack_dir.join("manifest.toml"), manifest).unwrap();

    let record_path = dir.join("record.json");
    fs::write(&record_path, RECORD_JSON).unwrap();
    let output_path = dir.join("document.json");
    let args = ProjectArgs {
        record: record_path,
        output: Some(output_path.clone()),
        pack_dir: Some(pack_dir),
        no_summary: true,
    };
    run_project(&args).expect("project");

    let written = fs::read_to_string(&output_path).unwrap();
    let document: CanonicalDocument = serde_json::from_str(&written).unwrap();
    assert_eq!(document.residence.current.country, "UAE (Dubai)");
    // Families absent from the external pack degrade softly.
    assert_eq!(document.applicant.salutation, "");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn project_refuses_an_unreadable_record() {
    let dir = unique_temp_dir("missing-record");
    let args = ProjectArgs {
        record: dir.join("absent.json"),
        output: None,
        pack_dir: None,
        no_summary: true,
    };
    assert!(run_project(&args).is_err());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn verify_reports_a_tampered_pack() {
    let dir = unique_temp_dir("verify-tamper");
    let pack_dir = dir.join("pack");
    fs::create_dir_all(&pack_dir).unwrap();
    fs::write(pack_dir.join("country.toml"), b"tampered bytes").unwrap();
    let manifest = format!(
        "[manifest]\nschema = \"aif-filing.picklist-manifest\"\nschema_version = 1\n\n\
         [[files]]\npath = \"country.toml\"\nsha256 = \"{}\"\nkind = \"toml\"\n",
        Sha256Pin::of(b"the bytes the publisher pinned")
    );
    fs::write(pack_dir.join("manifest.toml"), manifest).unwrap();

    let args = VerifyArgs { pack_dir };
    let error = run_verify(&args).expect_err("tampered pack must fail");
    assert!(format!("{error:#}").contains("sha256 mismatch"), "{error:#}");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn picklists_lists_builtin_tables() {
    let args = PicklistArgs { pack_dir: None };
    run_picklists(&args).expect("picklists");
}
