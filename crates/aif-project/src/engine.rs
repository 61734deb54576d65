//! Projection orchestrator.
//!
//! Sequences flag derivation, section composition, and collection mapping
//! into one pure function from raw record to canonical document. The only
//! side effects are the injected clock read and diagnostic logging.

use aif_model::document::{
    CanonicalDocument, DocumentMeta, DOCUMENT_SCHEMA, DOCUMENT_SCHEMA_VERSION,
};
use aif_model::record::RawRecord;
use tracing::debug;

use crate::collection::map_collection;
use crate::context::ProjectionContext;
use crate::error::ProjectionError;
use crate::flags::derive_flags;
use crate::sections;

/// Projects one raw record into a canonical filing document.
///
/// The record is read-only; the returned document is freshly allocated and
/// owned by the caller. Repeated calls with the same record and a fixed clock
/// produce identical documents.
///
/// # Errors
///
/// Returns [`ProjectionError::MissingRecordId`] when the record has no usable
/// primary identifier. This is the only caller-visible failure; every other
/// gap in the raw data degrades to a safe default.
pub fn project(
    record: &RawRecord,
    ctx: &ProjectionContext<'_>,
) -> Result<CanonicalDocument, ProjectionError> {
    let record_id = record
        .record_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(ProjectionError::MissingRecordId)?;

    let flags = derive_flags(record);
    debug!(record_id, flag_count = flags.len(), "derived condition flags");

    let document = CanonicalDocument {
        meta: DocumentMeta {
            schema: DOCUMENT_SCHEMA.to_string(),
            schema_version: DOCUMENT_SCHEMA_VERSION,
            generated_at: ctx.now(),
            record_id: record_id.to_string(),
        },
        applicant: sections::applicant(record, &flags, ctx),
        residence: sections::residence(record, &flags, ctx),
        appointment: sections::appointment(record, &flags, ctx),
        experience: sections::experience(record, &flags),
        disclosures: sections::disclosures(record, &flags, ctx),
        citizenships: map_collection(&record.citizenships, |item| {
            sections::citizenship_entry(item, ctx)
        }),
        regulatory_history: map_collection(&record.regulatory_history, |item| {
            sections::regulatory_history_entry(item, ctx)
        }),
        employment_history: map_collection(&record.employment_history, sections::employment_entry),
    };

    debug!(
        record_id,
        citizenships = document.citizenships.len(),
        regulatory_history = document.regulatory_history.len(),
        employment_history = document.employment_history.len(),
        "projected canonical document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_id_aborts() {
        let catalog = aif_model::picklist::PicklistCatalog::new();
        let ctx = ProjectionContext::new(&catalog);
        let error = project(&RawRecord::default(), &ctx).expect_err("must refuse");
        assert_eq!(error, ProjectionError::MissingRecordId);
    }

    #[test]
    fn blank_record_id_aborts() {
        let catalog = aif_model::picklist::PicklistCatalog::new();
        let ctx = ProjectionContext::new(&catalog);
        let record = RawRecord {
            record_id: Some("   ".to_string()),
            ..RawRecord::default()
        };
        let error = project(&record, &ctx).expect_err("must refuse");
        assert_eq!(error, ProjectionError::MissingRecordId);
    }
}
