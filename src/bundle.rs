//! Single-file databases for the search pages
//!
//! Every scope file of one kind is concatenated, in path order, into one
//! array. Small results go to `{kind}_db.json`; once the pretty-printed array
//! passes the size limit it is split into `{kind}/part{N}.json` chunks and
//! `{kind}_db.json` becomes an index listing the parts.

use crate::id::EntityKind;
use crate::pass::FileFailure;
use crate::store::{write_json, ScopeStore};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_SIZE_LIMIT: usize = 5 * 1024 * 1024;
pub const DEFAULT_CHUNK_SIZE: usize = 3000;

#[derive(Debug, Clone, Copy)]
pub struct BundleLimits {
    /// Largest single file, in bytes, before splitting
    pub size_limit: usize,
    /// Records per part once split
    pub chunk_size: usize,
}

impl Default for BundleLimits {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Contents of `{kind}_db.json` when the database is split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleIndex {
    pub kind: EntityKind,
    pub total: usize,
    pub parts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BundleOutput {
    Single(PathBuf),
    Split { index: PathBuf, parts: Vec<PathBuf> },
}

#[derive(Debug, Clone)]
pub struct BundleSummary {
    pub files_read: usize,
    pub records: usize,
    pub bytes: usize,
    pub failures: Vec<FileFailure>,
    pub output: BundleOutput,
}

/// Every record in the scope files of `kind`. Unreadable files are skipped.
pub fn gather(store: &ScopeStore, kind: EntityKind) -> Result<(Vec<Value>, usize, Vec<FileFailure>)> {
    let mut records = Vec::new();
    let mut failures = Vec::new();
    let mut files_read = 0;

    for path in store.scope_files(kind)? {
        match store.read_raw(&path) {
            Ok(items) => {
                info!("✓ {} ({} records)", path.display(), items.len());
                files_read += 1;
                records.extend(items);
            }
            Err(err) => failures.push(FileFailure::report(&path, err)),
        }
    }
    Ok((records, files_read, failures))
}

pub fn bundle_kind(store: &ScopeStore, kind: EntityKind, output: &Path, limits: BundleLimits) -> Result<BundleSummary> {
    let (records, files_read, failures) = gather(store, kind)?;
    let json = serde_json::to_string_pretty(&records)?;
    let bytes = json.len();
    let db_path = output.join(format!("{}_db.json", kind.dir_name()));

    let output = if bytes <= limits.size_limit {
        write_json(&db_path, &json)?;
        BundleOutput::Single(db_path)
    } else {
        info!(
            "{:.2} MB exceeds the {:.2} MB limit, splitting into parts of {}",
            bytes as f64 / 1024.0 / 1024.0,
            limits.size_limit as f64 / 1024.0 / 1024.0,
            limits.chunk_size
        );
        let mut parts = Vec::new();
        let mut names = Vec::new();
        for (i, chunk) in records.chunks(limits.chunk_size.max(1)).enumerate() {
            let name = format!("{}/part{}.json", kind.dir_name(), i + 1);
            let path = output.join(&name);
            write_json(&path, &serde_json::to_string_pretty(chunk)?)?;
            info!("✓ {} ({} records)", name, chunk.len());
            parts.push(path);
            names.push(name);
        }
        let index = BundleIndex {
            kind,
            total: records.len(),
            parts: names,
        };
        write_json(&db_path, &serde_json::to_string_pretty(&index)?)?;
        BundleOutput::Split { index: db_path, parts }
    };

    Ok(BundleSummary {
        files_read,
        records: records.len(),
        bytes,
        failures,
        output,
    })
}
