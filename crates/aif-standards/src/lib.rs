#![deny(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod pack;

pub use crate::builtin::builtin_catalog;
pub use crate::error::PackError;
pub use crate::pack::{load_pack_dir, load_pack_file, parse_pack, VerifySummary};
