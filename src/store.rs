//! Scope files on disk
//!
//! Every scope (one town for one property kind) is a single pretty-printed
//! JSON array of buyer records at
//! `{root}/{kind}/area/{prefecture}/{city}/{town}.json`. Older land data also
//! has files under `{root}/land/station/`.

use crate::id::EntityKind;
use crate::record::BuyerRecord;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const AREA_DIR: &str = "area";
/// Older land data was also grouped by station catchment
pub const STATION_DIR: &str = "station";

#[derive(Debug, Clone)]
pub struct ScopeStore {
    root: PathBuf,
}

impl ScopeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding every scope file of one kind
    pub fn kind_dir(&self, kind: EntityKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    pub fn area_path(&self, kind: EntityKind, prefecture: &str, city: &str, town: &str) -> PathBuf {
        self.kind_dir(kind)
            .join(AREA_DIR)
            .join(prefecture)
            .join(city)
            .join(format!("{}.json", town))
    }

    /// Replace the scope file at `path` with `records`.
    ///
    /// The array is written to a sibling temp file and renamed over the
    /// target, so readers never see a half-written scope.
    pub fn write_records(&self, path: &Path, records: &[BuyerRecord]) -> Result<()> {
        write_json(path, &serde_json::to_string_pretty(records)?)
    }

    pub fn read_records(&self, path: &Path) -> Result<Vec<BuyerRecord>> {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Read a scope file without interpreting its records. Fails when the
    /// file is not a JSON array.
    pub fn read_raw(&self, path: &Path) -> Result<Vec<Value>> {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let value: Value =
            serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
        match value {
            Value::Array(items) => Ok(items),
            _ => bail!("Not an array: {}", path.display()),
        }
    }

    /// Scope files of one kind: the `area` tree, then the `station` tree,
    /// each in path order. Anything else under the kind directory is not a
    /// scope file.
    pub fn scope_files(&self, kind: EntityKind) -> Result<Vec<PathBuf>> {
        let dir = self.kind_dir(kind);
        let mut files = find_json_files(&dir.join(AREA_DIR))?;
        files.extend(find_json_files(&dir.join(STATION_DIR))?);
        Ok(files)
    }
}

/// Write already-serialized JSON through a sibling temp file, creating
/// parent directories as needed
pub fn write_json(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

/// Recursively collect `*.json` files under `dir`, sorted by path.
/// A missing directory yields an empty list.
pub fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if dir.is_dir() {
        collect_json_files(dir, &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path);
        }
    }
    Ok(())
}
