//! Buyer identifiers
//!
//! Ids look like `KO-00042`: an entity-kind prefix and a counter padded to at
//! least five digits. Numbers past 99999 simply get longer. The search UI
//! deduplicates on the exact string, so the format is fixed.

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Property kind a buyer is interested in. Each kind has its own id space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    House,
    Land,
    Mansion,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::House, EntityKind::Land, EntityKind::Mansion];

    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::House => "KO",
            EntityKind::Land => "TO",
            EntityKind::Mansion => "TC",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.prefix() == prefix)
    }

    /// Directory name used under the data root
    pub fn dir_name(self) -> &'static str {
        match self {
            EntityKind::House => "house",
            EntityKind::Land => "land",
            EntityKind::Mansion => "mansion",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A formatted buyer id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BuyerId {
    kind: EntityKind,
    number: u64,
}

impl BuyerId {
    pub fn new(kind: EntityKind, number: u64) -> Self {
        Self { kind, number }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    /// Parse `PREFIX-NNNNN` (at least five digits)
    pub fn parse(s: &str) -> Result<Self> {
        let (prefix, digits) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("buyer id {:?} has no '-' separator", s))?;
        let kind = EntityKind::from_prefix(prefix)
            .ok_or_else(|| anyhow!("buyer id {:?} has unknown prefix {:?}", s, prefix))?;
        if digits.len() < 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            bail!("buyer id {:?} must end in at least five digits", s);
        }
        let number = digits.parse::<u64>()?;
        Ok(Self { kind, number })
    }
}

impl fmt::Display for BuyerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:05}", self.kind.prefix(), self.number)
    }
}

impl From<BuyerId> for String {
    fn from(id: BuyerId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for BuyerId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BuyerId::parse(&s).map_err(|e| e.to_string())
    }
}

/// Hands out strictly increasing ids for one entity kind during a run.
///
/// One allocator is shared by every scope of its kind, so it is never reset
/// between towns.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    kind: EntityKind,
    first: u64,
    next: u64,
}

impl IdAllocator {
    pub fn new(kind: EntityKind) -> Self {
        Self::starting_at(kind, 1)
    }

    pub fn starting_at(kind: EntityKind, first: u64) -> Self {
        Self {
            kind,
            first,
            next: first,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn next(&mut self) -> BuyerId {
        let id = BuyerId::new(self.kind, self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next - self.first
    }
}
