#![deny(unsafe_code)]

//! Picklist pack loading and verification.
//!
//! A pack directory contains a `manifest.toml` pinning every data file by
//! sha256, plus one or more TOML pack files declaring picklist tables. The
//! pack is verified, loaded, and frozen into a [`PicklistCatalog`] before the
//! first projection call; nothing mutates it afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use aif_model::picklist::{FallbackPolicy, PicklistCatalog, PicklistTable};
use serde::{Deserialize, Serialize};

use crate::error::PackError;
use crate::hash::Sha256Pin;
use crate::manifest::Manifest;

pub const MANIFEST_SCHEMA: &str = "aif-filing.picklist-manifest";
pub const PACK_SCHEMA: &str = "aif-filing.picklist-pack";
pub const SCHEMA_VERSION: u32 = 1;

const ALLOWED_KINDS: &[&str] = &["toml"];

/// On-disk shape of one pack file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackFile {
    pub pack: PackHeader,
    #[serde(default, rename = "table")]
    pub tables: Vec<TableDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    #[serde(default)]
    pub fallback: FallbackPolicy,
    #[serde(default, rename = "term")]
    pub terms: Vec<TermDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDef {
    pub code: String,
    pub label: String,
}

/// Summary of a verified pack, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub pack_dir: PathBuf,
    pub file_count: usize,
    pub table_count: usize,
    pub term_count: usize,
}

/// Parses one pack file's contents into picklist tables.
pub fn parse_pack(contents: &str, source: &Path) -> Result<Vec<PicklistTable>, PackError> {
    let file: PackFile = toml::from_str(contents).map_err(|e| PackError::Toml {
        path: source.to_path_buf(),
        source: e,
    })?;

    if file.pack.schema != PACK_SCHEMA {
        return Err(PackError::InvalidPack {
            path: source.to_path_buf(),
            message: format!("unsupported schema: {}", file.pack.schema),
        });
    }
    if file.pack.schema_version != SCHEMA_VERSION {
        return Err(PackError::InvalidPack {
            path: source.to_path_buf(),
            message: format!("unsupported schema_version: {}", file.pack.schema_version),
        });
    }

    let mut tables = Vec::with_capacity(file.tables.len());
    for def in file.tables {
        if def.name.trim().is_empty() {
            return Err(PackError::InvalidPack {
                path: source.to_path_buf(),
                message: "table with empty name".to_string(),
            });
        }
        let mut table = PicklistTable::new(def.name, def.fallback);
        for term in &def.terms {
            if term.code.trim().is_empty() {
                return Err(PackError::InvalidPack {
                    path: source.to_path_buf(),
                    message: format!("table '{}' has a term with an empty code", table.name),
                });
            }
            table.add_term(&term.code, term.label.clone());
        }
        tables.push(table);
    }
    Ok(tables)
}

/// Loads one pack file from disk, without manifest verification.
pub fn load_pack_file(path: &Path) -> Result<Vec<PicklistTable>, PackError> {
    let contents = std::fs::read_to_string(path).map_err(|e| PackError::io(path, e))?;
    parse_pack(&contents, path)
}

/// Verifies a pack directory against its manifest and loads every table.
///
/// Verification covers the manifest schema, per-file content pins, entry
/// path hygiene, and the absence of unlisted files. Loading rejects
/// duplicate table names across files: the catalog must be unambiguous.
pub fn load_pack_dir(pack_dir: &Path) -> Result<(PicklistCatalog, VerifySummary), PackError> {
    let manifest = load_manifest(&pack_dir.join("manifest.toml"))?;
    let entries = pinned_entries(&manifest)?;
    reject_unlisted_files(pack_dir, &entries)?;

    let mut catalog = PicklistCatalog::new();
    let mut term_count = 0usize;
    for (path, pin) in &entries {
        let contents = read_pinned(pack_dir, path, pin)?;
        for table in parse_pack(&contents, &pack_dir.join(path))? {
            if catalog.get(&table.name).is_some() {
                return Err(PackError::DuplicateTable { name: table.name });
            }
            term_count += table.len();
            catalog.add_table(table);
        }
    }

    let summary = VerifySummary {
        pack_dir: pack_dir.to_path_buf(),
        file_count: entries.len(),
        table_count: catalog.len(),
        term_count,
    };
    Ok((catalog, summary))
}

fn load_manifest(path: &Path) -> Result<Manifest, PackError> {
    let contents = std::fs::read_to_string(path).map_err(|e| PackError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| PackError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Checks the manifest header and collects its file entries in path order,
/// pins parsed and entry paths checked.
fn pinned_entries(manifest: &Manifest) -> Result<BTreeMap<PathBuf, Sha256Pin>, PackError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(PackError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != SCHEMA_VERSION {
        return Err(PackError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }
    if manifest.files.is_empty() {
        return Err(PackError::InvalidManifest {
            message: "manifest lists no pack files".to_string(),
        });
    }

    let mut entries = BTreeMap::new();
    for file in &manifest.files {
        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(PackError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }
        let pin = Sha256Pin::parse(&file.sha256).ok_or_else(|| PackError::InvalidSha256 {
            path: PathBuf::from(&file.path),
            message: "pin is not 64 hex characters".to_string(),
        })?;
        let path = manifest_entry_path(&file.path)?;
        if entries.insert(path, pin).is_some() {
            return Err(PackError::InvalidManifest {
                message: format!("duplicate path in manifest: {}", file.path),
            });
        }
    }
    Ok(entries)
}

/// Checks one manifest entry and returns it as a path relative to the pack
/// directory.
///
/// Entries are '/'-separated and must stay inside the pack directory, so
/// backslash separators, absolute paths, and `..` segments are all rejected
/// before any file is read. `.` segments are dropped so equivalent spellings
/// of the same entry collide in the duplicate check.
fn manifest_entry_path(entry: &str) -> Result<PathBuf, PackError> {
    let reject = |message: &str| PackError::InvalidPath {
        path: PathBuf::from(entry),
        message: message.to_string(),
    };
    if entry.contains('\\') {
        return Err(reject("entry must use '/' separators"));
    }
    if entry.starts_with('/') {
        return Err(reject("entry must be relative to the pack directory"));
    }

    let mut path = PathBuf::new();
    for segment in entry.split('/') {
        match segment {
            "." => {}
            "" => return Err(reject("entry has an empty segment")),
            ".." => return Err(reject("entry must not leave the pack directory")),
            segment => path.push(segment),
        }
    }
    if path.as_os_str().is_empty() {
        return Err(reject("entry names no file"));
    }
    Ok(path)
}

/// Rejects files on disk that the manifest does not pin. `manifest.toml`
/// itself is the only unpinned file a pack may contain.
fn reject_unlisted_files(
    pack_dir: &Path,
    entries: &BTreeMap<PathBuf, Sha256Pin>,
) -> Result<(), PackError> {
    let mut on_disk = BTreeSet::new();
    collect_files(pack_dir, pack_dir, &mut on_disk)?;
    on_disk.remove(Path::new("manifest.toml"));
    for path in on_disk {
        if !entries.contains_key(&path) {
            return Err(PackError::UnexpectedFile {
                path: pack_dir.join(path),
            });
        }
    }
    Ok(())
}

fn collect_files(
    pack_dir: &Path,
    dir: &Path,
    found: &mut BTreeSet<PathBuf>,
) -> Result<(), PackError> {
    for entry in std::fs::read_dir(dir).map_err(|e| PackError::io(dir, e))? {
        let entry = entry.map_err(|e| PackError::io(dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| PackError::io(entry.path(), e))?;
        if file_type.is_dir() {
            collect_files(pack_dir, &entry.path(), found)?;
        } else if file_type.is_file() {
            let relative = entry
                .path()
                .strip_prefix(pack_dir)
                .map_err(|_| PackError::InvalidPath {
                    path: entry.path(),
                    message: "file is not inside the pack directory".to_string(),
                })?
                .to_path_buf();
            found.insert(relative);
        }
    }
    Ok(())
}

/// Reads one pack file and verifies its content pin before handing the
/// contents to the parser.
fn read_pinned(pack_dir: &Path, path: &Path, pin: &Sha256Pin) -> Result<String, PackError> {
    let full_path = pack_dir.join(path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            PackError::io(full_path.clone(), e)
        }
    })?;

    if !pin.matches(&bytes) {
        return Err(PackError::Sha256Mismatch {
            path: full_path,
            expected: pin.to_string(),
            actual: Sha256Pin::of(&bytes).to_string(),
        });
    }
    String::from_utf8(bytes).map_err(|_| PackError::InvalidPack {
        path: full_path,
        message: "pack file is not valid UTF-8".to_string(),
    })
}
