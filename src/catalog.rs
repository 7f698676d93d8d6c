//! Occupation catalog and the age rules layered on top of it
//!
//! The catalog file lists `{id, name}` entries, optionally with an `ageFloor`.
//! Two entries carry floors that the catalog file does not state: part-time
//! work is only plausible from 57 and "unemployed" (retired) from 67. Those
//! rules live in [`AGE_GATES`] and are attached to the entries on load.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    pub id: u32,
    pub name: String,
    /// Youngest age at which this occupation may be assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_floor: Option<u8>,
}

impl Occupation {
    pub fn allows_age(&self, age: u8) -> bool {
        self.age_floor.map_or(true, |floor| age >= floor)
    }
}

/// An age floor keyed by catalog id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeGate {
    pub occupation_id: u32,
    pub min_age: u8,
    pub label: &'static str,
}

/// パート・アルバイト
pub const PART_TIME: AgeGate = AgeGate {
    occupation_id: 49,
    min_age: 57,
    label: "part-time/temp work",
};

/// 無職
pub const UNEMPLOYED: AgeGate = AgeGate {
    occupation_id: 50,
    min_age: 67,
    label: "unemployed/retired",
};

pub const AGE_GATES: &[AgeGate] = &[PART_TIME, UNEMPLOYED];

/// Occupations treated as steady salaried income when building a residential pool
pub const STABLE_INCOME_IDS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 28, 29, 31, 32, 33];

/// Occupations that own or run a business
pub const BUSINESS_OWNER_IDS: &[u32] = &[26, 27, 28, 29, 31, 32, 33];

const HIGH_INCOME_NAMES: &[&str] = &["医師", "歯科医師", "経営者・役員", "不動産業", "建設業"];

const STABLE_EMPLOYMENT_NAMES: &[&str] = &[
    "公務員（国家公務員）",
    "公務員（地方公務員）",
    "教員（小・中・高校）",
    "会社員（管理職）",
];

/// Income bracket used to bias the financing method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeTier {
    High,
    StableEmployment,
    Other,
}

impl IncomeTier {
    pub fn of(occupation: &str) -> Self {
        if HIGH_INCOME_NAMES.contains(&occupation) {
            IncomeTier::High
        } else if STABLE_EMPLOYMENT_NAMES.contains(&occupation) {
            IncomeTier::StableEmployment
        } else {
            IncomeTier::Other
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    occupations: Vec<Occupation>,
}

#[derive(Debug, Clone)]
pub struct OccupationCatalog {
    entries: Vec<Occupation>,
}

impl OccupationCatalog {
    /// Build a catalog and attach the [`AGE_GATES`] floors
    pub fn new(mut entries: Vec<Occupation>) -> Result<Self> {
        ensure!(!entries.is_empty(), "occupation catalog is empty");
        for entry in &mut entries {
            for gate in AGE_GATES.iter().filter(|g| g.occupation_id == entry.id) {
                let floor = entry.age_floor.unwrap_or(0).max(gate.min_age);
                debug!(id = entry.id, floor, "age gate: {}", gate.label);
                entry.age_floor = Some(floor);
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.occupations)
    }

    /// Load the catalog file. A missing or malformed catalog is fatal for a run.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("occupation catalog not found: {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("failed to parse occupation catalog: {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Occupation] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&Occupation> {
        self.entries.iter().find(|o| o.id == id)
    }

    /// Entries whose age floor is satisfied.
    ///
    /// Never empty: if every entry is gated out, the whole catalog is returned.
    pub fn eligible(&self, age: u8) -> Vec<&Occupation> {
        let pool: Vec<&Occupation> = self.entries.iter().filter(|o| o.allows_age(age)).collect();
        if pool.is_empty() {
            debug!(age, "age filter emptied the occupation pool, using full catalog");
            return self.entries.iter().collect();
        }
        pool
    }
}

/// Narrow `pool` to the entries listed in `ids`, keeping it unchanged when
/// none of them are present.
pub fn prefer_ids<'a>(pool: Vec<&'a Occupation>, ids: &[u32]) -> Vec<&'a Occupation> {
    let preferred: Vec<&Occupation> = pool.iter().copied().filter(|o| ids.contains(&o.id)).collect();
    if preferred.is_empty() {
        pool
    } else {
        preferred
    }
}
