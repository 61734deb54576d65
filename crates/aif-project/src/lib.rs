//! Rule-driven projection of raw CRM applicant records into canonical
//! Authorised Individual filing documents.
//!
//! The pipeline is a synchronous, CPU-only pure computation: flag derivation,
//! picklist resolution, repeating collection mapping, and section composition
//! sequenced by [`engine::project`]. Concurrent projections need no
//! coordination; the catalog is immutable after bootstrap and every document
//! is freshly allocated.

pub mod collection;
pub mod context;
pub mod engine;
pub mod error;
pub mod flags;
pub mod sections;

pub use collection::map_collection;
pub use context::{Clock, ProjectionContext};
pub use engine::project;
pub use error::ProjectionError;
pub use flags::{derive_flags, FlagRule, FLAG_RULES};
