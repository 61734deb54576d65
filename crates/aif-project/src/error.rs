use thiserror::Error;

/// Hard invariant violations that abort a projection.
///
/// Everything else the raw record can get wrong is a soft data gap and
/// degrades to a safe default instead of surfacing here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// The raw record has no usable primary identifier. Downstream consumers
    /// require a stable id, so no document is produced.
    #[error("raw record is missing its required record identifier")]
    MissingRecordId,
}
