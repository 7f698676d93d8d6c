//! Purpose-first regeneration of existing land files
//!
//! Walks `land/area` and `land/station`, replaces every buyer in each file
//! with a purpose-first one and writes the file back. The only value carried
//! over from the old entry is its timing, mapped onto the current labels.
//! Ids are reissued from a single allocator in file order.
//!
//! A file that cannot be read or is not a JSON array is logged, recorded in
//! the summary and left untouched.

use crate::generator::BuyerGenerator;
use crate::id::{EntityKind, IdAllocator};
use crate::pass::PassSummary;
use crate::record::BuyerRecord;
use crate::store::ScopeStore;
use crate::vocab::Timing;
use anyhow::Result;
use rand::Rng;
use serde_json::Value;
use tracing::info;

/// Timing of an existing entry. Missing or unknown values fall back the same
/// way legacy labels do.
pub fn carried_timing(entry: &Value) -> Timing {
    Timing::from_legacy(entry.get("timing").and_then(Value::as_str).unwrap_or_default())
}

/// Regenerate one file's worth of entries
pub fn regenerate(
    entries: &[Value],
    generator: &BuyerGenerator<'_>,
    ids: &mut IdAllocator,
    rng: &mut impl Rng,
) -> Result<Vec<BuyerRecord>> {
    entries
        .iter()
        .map(|entry| generator.purpose_first(ids, Some(carried_timing(entry)), rng))
        .collect()
}

pub fn normalize_land(
    store: &ScopeStore,
    generator: &BuyerGenerator<'_>,
    rng: &mut impl Rng,
) -> Result<PassSummary> {
    let files = store.scope_files(EntityKind::Land)?;
    info!("Found {} files to process", files.len());

    let mut ids = IdAllocator::new(EntityKind::Land);
    let mut summary = PassSummary::default();

    for path in &files {
        let entries = match store.read_raw(path) {
            Ok(entries) => entries,
            Err(err) => {
                summary.fail(path, err);
                continue;
            }
        };
        let records = regenerate(&entries, generator, &mut ids, rng)?;
        if let Err(err) = store.write_records(path, &records) {
            summary.fail(path, err);
            continue;
        }
        summary.processed(&records);
    }

    Ok(summary)
}
