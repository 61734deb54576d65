//! Repeating collection mapping.
//!
//! Raw sub-collections arrive already shape-normalized: the record
//! deserializer turns a `null`, missing, or non-array relationship into an
//! empty slice (a non-fatal degradation, since a relationship with zero
//! related records is routinely serialized as `null` upstream). This mapper
//! adds the ordering and cardinality guarantees on top.

/// Maps each raw item into an output entry.
///
/// Guarantees: output length equals input length and output order equals
/// input order. The mapper must not filter or reorder; it only extracts
/// fields and resolves codes per item.
pub fn map_collection<R, T>(items: &[R], mapper: impl Fn(&R) -> T) -> Vec<T> {
    items.iter().map(mapper).collect()
}
