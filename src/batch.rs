//! Area batches: one scope file per town and property kind
//!
//! The taxonomy is a nested JSON object, prefecture → city → list of towns.
//! Towns are visited in document order and each requested kind gets its own
//! buyer count per town. Ids keep counting across towns.

use crate::generator::BuyerGenerator;
use crate::id::{EntityKind, IdAllocator};
use crate::sampler::random_int;
use crate::store::ScopeStore;
use crate::tables::Strategy;
use anyhow::{bail, Context, Result};
use rand::Rng;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Towns that get larger buyer pools. Matched as substrings of the town name.
pub const MAJOR_TOWNS: &[&str] = &[
    "学園南",
    "学園北",
    "富雄元町",
    "西大寺本町",
    "三条本町",
    "梅田",
    "心斎橋",
    "難波",
    "本町",
    "三宮町",
    "元町通",
    "四条烏丸",
    "河原町",
    "祇園",
    "北山",
    "嵐山",
    "広陵町",
    "香芝市",
    "大和高田市",
];

pub const MAJOR_TOWN_COUNT: (u8, u8) = (40, 63);
pub const OTHER_TOWN_COUNT: (u8, u8) = (16, 39);

/// Substring match, so "香芝市下田西" counts as major through "香芝市"
pub fn is_major_town(town: &str) -> bool {
    MAJOR_TOWNS.iter().any(|major| town.contains(major))
}

pub fn buyer_count(town: &str, rng: &mut impl Rng) -> usize {
    let (min, max) = if is_major_town(town) {
        MAJOR_TOWN_COUNT
    } else {
        OTHER_TOWN_COUNT
    };
    random_int(min, max, rng) as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub towns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefecture {
    pub name: String,
    pub cities: Vec<City>,
}

/// Prefecture → city → town listing, in file order
#[derive(Debug, Clone, Default)]
pub struct AreaTaxonomy {
    pub prefectures: Vec<Prefecture>,
}

/// One town of the taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    pub prefecture: &'a str,
    pub city: &'a str,
    pub town: &'a str,
}

impl AreaTaxonomy {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(prefectures) = value else {
            bail!("area taxonomy must be an object of prefectures");
        };

        let mut taxonomy = AreaTaxonomy::default();
        for (prefecture, cities) in prefectures {
            let Value::Object(cities) = cities else {
                bail!("prefecture {} must map to an object of cities", prefecture);
            };
            let mut entry = Prefecture {
                name: prefecture,
                cities: Vec::with_capacity(cities.len()),
            };
            for (city, towns) in cities {
                let towns: Vec<String> = serde_json::from_value(towns)
                    .with_context(|| format!("city {} must map to a list of town names", city))?;
                entry.cities.push(City { name: city, towns });
            }
            taxonomy.prefectures.push(entry);
        }
        Ok(taxonomy)
    }

    /// Load the taxonomy file. Missing or malformed input is fatal for a run.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("area taxonomy not found: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to parse area taxonomy: {}", path.display()))
    }

    pub fn scopes(&self) -> impl Iterator<Item = Scope<'_>> {
        self.prefectures.iter().flat_map(|p| {
            p.cities.iter().flat_map(move |c| {
                c.towns.iter().map(move |t| Scope {
                    prefecture: p.name.as_str(),
                    city: c.name.as_str(),
                    town: t.as_str(),
                })
            })
        })
    }

    pub fn town_count(&self) -> usize {
        self.scopes().count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub scopes_written: usize,
    /// Buyers generated per kind
    pub totals: BTreeMap<EntityKind, u64>,
}

impl BatchSummary {
    pub fn total(&self, kind: EntityKind) -> u64 {
        self.totals.get(&kind).copied().unwrap_or(0)
    }
}

/// Generate and write every town scope for each of `kinds`.
///
/// Land uses `land_strategy`; house and mansion are always family-first.
pub fn run_area_batch(
    taxonomy: &AreaTaxonomy,
    generator: &BuyerGenerator<'_>,
    kinds: &[EntityKind],
    land_strategy: Strategy,
    store: &ScopeStore,
    rng: &mut impl Rng,
) -> Result<BatchSummary> {
    let mut allocators: Vec<IdAllocator> = kinds.iter().map(|&k| IdAllocator::new(k)).collect();
    let mut summary = BatchSummary::default();

    let mut current_prefecture = "";
    for scope in taxonomy.scopes() {
        if scope.prefecture != current_prefecture {
            info!("--- {} ---", scope.prefecture);
            current_prefecture = scope.prefecture;
        }

        let mut counts = Vec::with_capacity(allocators.len());
        for ids in allocators.iter_mut() {
            let kind = ids.kind();
            let strategy = match kind {
                EntityKind::Land => land_strategy,
                EntityKind::House | EntityKind::Mansion => Strategy::FamilyFirst,
            };
            let count = buyer_count(scope.town, rng);
            let records = generator.generate_batch(strategy, count, ids, rng)?;

            let path = store.area_path(kind, scope.prefecture, scope.city, scope.town);
            store.write_records(&path, &records)?;
            debug!(path = %path.display(), count, "wrote scope");

            summary.scopes_written += 1;
            *summary.totals.entry(kind).or_insert(0) += count as u64;
            counts.push(format!("{}:{}", kind, count));
        }
        info!("{}/{} - {}", scope.city, scope.town, counts.join(", "));
    }

    Ok(summary)
}
