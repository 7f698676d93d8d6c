//! Distribution statistics over buyer records

use crate::record::BuyerRecord;
use crate::vocab::{LandArea, WalkingDistance};
use std::collections::HashMap;
use std::fmt::Write;

/// Record fields that are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Purpose,
    Family,
    Age,
    Timing,
    Method,
    LandArea,
    WalkingDistance,
    BuildingAge,
    Layout,
    Occupation,
    Reason,
    Ng,
}

impl Field {
    /// Report order
    pub const ALL: [Field; 12] = [
        Field::Purpose,
        Field::Family,
        Field::Timing,
        Field::Method,
        Field::LandArea,
        Field::WalkingDistance,
        Field::BuildingAge,
        Field::Layout,
        Field::Age,
        Field::Occupation,
        Field::Reason,
        Field::Ng,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Field::Purpose => "Purpose (利用目的)",
            Field::Family => "Family (家族構成)",
            Field::Age => "Age (年齢)",
            Field::Timing => "Timing (購入時期)",
            Field::Method => "Method (購入方法)",
            Field::LandArea => "Land Area (希望土地面積)",
            Field::WalkingDistance => "Walking Distance (駅徒歩)",
            Field::BuildingAge => "Building Age (築年数)",
            Field::Layout => "Layout (間取り)",
            Field::Occupation => "Occupations (職業)",
            Field::Reason => "Reasons (購入理由)",
            Field::Ng => "NG Conditions (NG条件)",
        }
    }

    /// Fields whose labels have an inherent order are reported in it
    fn natural_order(self) -> Option<Vec<&'static str>> {
        match self {
            Field::LandArea => Some(LandArea::ALL.iter().map(|a| a.as_str()).collect()),
            Field::WalkingDistance => Some(WalkingDistance::ALL.iter().map(|w| w.as_str()).collect()),
            _ => None,
        }
    }

    fn label(self, record: &BuyerRecord) -> Option<String> {
        match self {
            Field::Purpose => record.purpose.map(String::from),
            Field::Family => Some(record.family.to_string()),
            Field::Age => Some(format!("{}歳", record.age)),
            Field::Timing => Some(record.timing.to_string()),
            Field::Method => Some(record.method.to_string()),
            Field::LandArea => record.land_area.map(String::from),
            Field::WalkingDistance => record.walking_distance.map(String::from),
            Field::BuildingAge => record.building_age.map(String::from),
            Field::Layout => record.layout.map(String::from),
            Field::Occupation => Some(record.occupation.clone()),
            Field::Reason => Some(record.reason.clone()),
            Field::Ng => Some(record.ng.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub label: String,
    pub count: u64,
    /// Percent of all recorded buyers
    pub percentage: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DistributionStats {
    buyers: u64,
    counts: HashMap<Field, HashMap<String, u64>>,
}

impl DistributionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &BuyerRecord) {
        self.buyers += 1;
        for field in Field::ALL {
            if let Some(label) = field.label(record) {
                *self.counts.entry(field).or_default().entry(label).or_insert(0) += 1;
            }
        }
    }

    pub fn extend<'a>(&mut self, records: impl IntoIterator<Item = &'a BuyerRecord>) {
        for record in records {
            self.record(record);
        }
    }

    pub fn buyers(&self) -> u64 {
        self.buyers
    }

    pub fn count(&self, field: Field, label: &str) -> u64 {
        self.counts
            .get(&field)
            .and_then(|c| c.get(label))
            .copied()
            .unwrap_or(0)
    }

    /// Shares for one field. Ordered fields keep their natural order and
    /// ignore `top`; the rest are sorted by descending count (ties by label)
    /// and cut to `top` entries when given.
    pub fn shares(&self, field: Field, top: Option<usize>) -> Vec<Share> {
        let Some(counts) = self.counts.get(&field) else {
            return Vec::new();
        };
        let share = |label: &str, count: u64| Share {
            label: label.to_string(),
            count,
            percentage: if self.buyers == 0 {
                0.0
            } else {
                count as f64 / self.buyers as f64 * 100.0
            },
        };

        if let Some(order) = field.natural_order() {
            return order
                .into_iter()
                .filter_map(|label| counts.get(label).map(|&c| share(label, c)))
                .collect();
        }

        let mut shares: Vec<Share> = counts.iter().map(|(label, &c)| share(label, c)).collect();
        shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
        if let Some(top) = top {
            shares.truncate(top);
        }
        shares
    }

    /// Plain-text report of every field that has data
    pub fn report(&self, top: Option<usize>) -> String {
        let mut out = String::new();
        for field in Field::ALL {
            let shares = self.shares(field, top);
            if shares.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}:", field.title());
            for s in shares {
                let _ = writeln!(out, "  {}: {} ({:.2}%)", s.label, s.count, s.percentage);
            }
            let _ = writeln!(out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{BuyerId, EntityKind};
    use crate::vocab::{Family, Method, Purpose, Timing};

    fn land(number: u64, area: LandArea, occupation: &str) -> BuyerRecord {
        BuyerRecord {
            id: BuyerId::new(EntityKind::Land, number),
            family: Family::Couple,
            age: 40,
            occupation: occupation.to_string(),
            timing: Timing::Immediate,
            method: Method::Mortgage,
            reason: "資産形成".to_string(),
            ng: "特になし".to_string(),
            purpose: Some(Purpose::DetachedHouse),
            building_age: None,
            layout: None,
            land_area: Some(area),
            walking_distance: None,
        }
    }

    fn sample() -> DistributionStats {
        let mut stats = DistributionStats::new();
        stats.extend(&[
            land(1, LandArea::Over300, "医師"),
            land(2, LandArea::UpTo50, "会社員（一般）"),
            land(3, LandArea::Over300, "会社員（一般）"),
            land(4, LandArea::From151To300, "会社員（一般）"),
        ]);
        stats
    }

    #[test]
    fn test_counts_and_percentages() {
        let stats = sample();
        assert_eq!(stats.buyers(), 4);
        assert_eq!(stats.count(Field::Occupation, "会社員（一般）"), 3);
        assert_eq!(stats.count(Field::Age, "40歳"), 4);
        assert_eq!(stats.count(Field::BuildingAge, "築15年まで"), 0);

        let shares = stats.shares(Field::Occupation, Some(1));
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].label, "会社員（一般）");
        assert!((shares[0].percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_land_area_in_natural_order() {
        let stats = sample();
        let labels: Vec<String> = stats
            .shares(Field::LandArea, Some(1))
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, vec!["〜50㎡", "151〜300㎡", "301㎡以上"]);
    }

    #[test]
    fn test_report_skips_empty_fields() {
        let report = sample().report(Some(10));
        assert!(report.contains("Land Area (希望土地面積):\n  〜50㎡: 1 (25.00%)"));
        assert!(!report.contains("Layout"));
        assert!(!report.contains("Walking Distance"));
    }
}
