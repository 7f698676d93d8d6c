//! Synthetic buyer generation
//!
//! A [`BuyerGenerator`] turns an [`IdAllocator`] and an RNG into buyer records.
//! The property kind comes from the allocator, so a house allocator always
//! yields `KO-` house buyers.
//!
//! Two orderings are supported (see [`Strategy`]):
//!
//! - family-first: household → age → occupation, then timing, method, reason
//!   and NG condition from independent tables, then the kind-specific fields
//!   conditioned on the household
//! - purpose-first (land only): purpose → reason → household → age →
//!   occupation → method → plot size → station distance, each conditioned on
//!   what came before

use crate::catalog::{prefer_ids, Occupation, OccupationCatalog, BUSINESS_OWNER_IDS, STABLE_INCOME_IDS};
use crate::id::{EntityKind, IdAllocator};
use crate::record::BuyerRecord;
use crate::sampler::{pick_uniform, random_int};
use crate::tables::{FamilyFirstTables, PurposeFirstTables, ReasonSource, Strategy};
use crate::vocab::{Purpose, Timing};
use anyhow::{bail, Result};
use rand::Rng;

pub struct BuyerGenerator<'a> {
    catalog: &'a OccupationCatalog,
    house: FamilyFirstTables,
    land: FamilyFirstTables,
    purpose_first: PurposeFirstTables,
}

impl<'a> BuyerGenerator<'a> {
    pub fn new(catalog: &'a OccupationCatalog) -> Self {
        Self {
            catalog,
            house: FamilyFirstTables::house(),
            land: FamilyFirstTables::land(),
            purpose_first: PurposeFirstTables::land(),
        }
    }

    /// Generate one buyer of the allocator's kind
    pub fn generate(&self, strategy: Strategy, ids: &mut IdAllocator, rng: &mut impl Rng) -> Result<BuyerRecord> {
        match strategy {
            Strategy::FamilyFirst => Ok(self.family_first(ids, rng)),
            Strategy::PurposeFirst => self.purpose_first(ids, None, rng),
        }
    }

    /// Generate `count` buyers in id order
    pub fn generate_batch(
        &self,
        strategy: Strategy,
        count: usize,
        ids: &mut IdAllocator,
        rng: &mut impl Rng,
    ) -> Result<Vec<BuyerRecord>> {
        (0..count).map(|_| self.generate(strategy, ids, rng)).collect()
    }

    pub fn family_first(&self, ids: &mut IdAllocator, rng: &mut impl Rng) -> BuyerRecord {
        let kind = ids.kind();
        let tables = match kind {
            EntityKind::Land => &self.land,
            EntityKind::House | EntityKind::Mansion => &self.house,
        };

        let family = tables.family.sample(rng);
        let (min_age, max_age) = tables.ages.range(family);
        let age = random_int(min_age, max_age, rng);
        let occupation = draw_occupation(self.catalog.eligible(age), rng);

        let mut record = BuyerRecord {
            id: ids.next(),
            family,
            age,
            occupation,
            timing: tables.timing.sample(rng),
            method: tables.method.sample(rng),
            reason: tables.reason.sample(rng).to_string(),
            ng: tables.ng.sample(rng).to_string(),
            purpose: None,
            building_age: None,
            layout: None,
            land_area: None,
            walking_distance: None,
        };

        match kind {
            EntityKind::House => {
                record.building_age = Some(tables.building_age.sample(rng));
                record.layout = Some(tables.layout(family).sample(rng));
                record.land_area = Some(tables.land_area(family).sample(rng));
                record.walking_distance = Some(tables.walking_distance.sample(rng));
            }
            EntityKind::Land => {
                record.purpose = Some(tables.purpose.sample(rng));
                record.land_area = Some(tables.land_area(family).sample(rng));
                record.walking_distance = Some(tables.walking_distance.sample(rng));
            }
            EntityKind::Mansion => {}
        }

        record
    }

    /// Purpose-first land buyer. `timing` carries over an existing buyer's
    /// urgency during regeneration; otherwise it is drawn.
    pub fn purpose_first(
        &self,
        ids: &mut IdAllocator,
        timing: Option<Timing>,
        rng: &mut impl Rng,
    ) -> Result<BuyerRecord> {
        if ids.kind() != EntityKind::Land {
            bail!("purpose-first generation only applies to land buyers, not {}", ids.kind());
        }
        let tables = &self.purpose_first;

        let purpose = tables.purpose.sample(rng);
        let reason = self.reason_for(purpose, rng);
        let family = tables.family(purpose, reason).sample(rng);
        let (min_age, max_age) = tables.ages.range(family);
        let age = random_int(min_age, max_age, rng);
        let occupation = self.occupation_for(age, purpose, rng);
        let timing = match timing {
            Some(t) => t,
            None => tables.timing.sample(rng),
        };
        let method = tables.method(&occupation, purpose).sample(rng);
        let ng = tables.ng.sample(rng).to_string();
        let land_area = tables.land_area(family, purpose, reason).sample(rng);
        let walking_distance = tables.walking_distance(reason, purpose).sample(rng);

        Ok(BuyerRecord {
            id: ids.next(),
            family,
            age,
            occupation,
            timing,
            method,
            reason: reason.to_string(),
            ng,
            purpose: Some(purpose),
            building_age: None,
            layout: None,
            land_area: Some(land_area),
            walking_distance: Some(walking_distance),
        })
    }

    /// Purchase reason conditioned on land purpose
    pub fn reason_for(&self, purpose: Purpose, rng: &mut impl Rng) -> &'static str {
        match self.purpose_first.reason(purpose) {
            ReasonSource::Fixed(reason) => reason,
            ReasonSource::Table(table) => table.sample(rng),
            ReasonSource::Biased { reason, rate, fallback } => {
                if rng.gen_bool(rate) {
                    reason
                } else {
                    fallback.sample(rng)
                }
            }
        }
    }

    /// Occupation eligible for `age`, biased toward business owners for
    /// commercial plots and toward salaried work for everything else
    pub fn occupation_for(&self, age: u8, purpose: Purpose, rng: &mut impl Rng) -> String {
        let tables = &self.purpose_first;
        let mut pool = self.catalog.eligible(age);
        if purpose.is_business_or_investment() {
            if rng.gen_bool(tables.business_owner_rate) {
                pool = prefer_ids(pool, BUSINESS_OWNER_IDS);
            }
        } else if rng.gen_bool(tables.stable_income_rate) {
            pool = prefer_ids(pool, STABLE_INCOME_IDS);
        }
        draw_occupation(pool, rng)
    }
}

fn draw_occupation(pool: Vec<&Occupation>, rng: &mut impl Rng) -> String {
    pick_uniform(&pool, rng)
        .map(|o| o.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PART_TIME, UNEMPLOYED};
    use crate::tables::{reasons, HOUSE_AGE_RANGES, LAND_AGE_RANGES};
    use crate::vocab::{Family, LandArea, Method, WalkingDistance};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn catalog() -> OccupationCatalog {
        OccupationCatalog::from_json(include_str!("../data/occupation_list.json")).unwrap()
    }

    #[test]
    fn test_first_house_id() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);

        let mut ids = IdAllocator::new(EntityKind::House);
        let record = generator.family_first(&mut ids, &mut rng);
        assert_eq!(record.id.to_string(), "KO-00001");

        let mut ids = IdAllocator::starting_at(EntityKind::House, 100000);
        let record = generator.family_first(&mut ids, &mut rng);
        assert_eq!(record.id.to_string(), "KO-100000");
    }

    #[test]
    fn test_ids_unique_and_increasing() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ids = IdAllocator::new(EntityKind::Land);

        let mut records = generator
            .generate_batch(Strategy::FamilyFirst, 500, &mut ids, &mut rng)
            .unwrap();
        records.extend(
            generator
                .generate_batch(Strategy::PurposeFirst, 500, &mut ids, &mut rng)
                .unwrap(),
        );

        let unique: HashSet<String> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(unique.len(), 1000);
        assert!(records.windows(2).all(|w| w[0].id.number() < w[1].id.number()));
        assert!(records.iter().all(|r| r.id.to_string().starts_with("TO-")));
    }

    #[test]
    fn test_age_stays_in_family_range() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);

        let cases = [
            (EntityKind::House, Strategy::FamilyFirst, HOUSE_AGE_RANGES),
            (EntityKind::Mansion, Strategy::FamilyFirst, HOUSE_AGE_RANGES),
            (EntityKind::Land, Strategy::FamilyFirst, LAND_AGE_RANGES),
            (EntityKind::Land, Strategy::PurposeFirst, LAND_AGE_RANGES),
        ];
        for (kind, strategy, ranges) in cases {
            let mut ids = IdAllocator::new(kind);
            for _ in 0..3000 {
                let record = generator.generate(strategy, &mut ids, &mut rng).unwrap();
                let (min, max) = ranges.range(record.family);
                assert!(
                    (min..=max).contains(&record.age),
                    "{:?} {:?}: age {} outside {}..={}",
                    kind,
                    record.family,
                    record.age,
                    min,
                    max
                );
            }
        }
    }

    #[test]
    fn test_single_buyer_age_bounds() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(7);

        let mut house = IdAllocator::new(EntityKind::House);
        let mut land = IdAllocator::new(EntityKind::Land);
        for _ in 0..5000 {
            let h = generator.family_first(&mut house, &mut rng);
            if h.family == Family::Single {
                assert!((25..=45).contains(&h.age));
            }
            let l = generator.family_first(&mut land, &mut rng);
            if l.family == Family::Single {
                assert!((28..=45).contains(&l.age));
            }
        }
    }

    #[test]
    fn test_age_gated_occupations() {
        let catalog = catalog();
        let part_time = catalog.get(PART_TIME.occupation_id).unwrap().name.clone();
        let unemployed = catalog.get(UNEMPLOYED.occupation_id).unwrap().name.clone();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);

        for (kind, strategy) in [
            (EntityKind::House, Strategy::FamilyFirst),
            (EntityKind::Land, Strategy::FamilyFirst),
            (EntityKind::Land, Strategy::PurposeFirst),
        ] {
            let mut ids = IdAllocator::new(kind);
            for _ in 0..5000 {
                let r = generator.generate(strategy, &mut ids, &mut rng).unwrap();
                if r.age < 57 {
                    assert_ne!(r.occupation, part_time, "age {}", r.age);
                }
                if r.age < 67 {
                    assert_ne!(r.occupation, unemployed, "age {}", r.age);
                }
            }
        }
    }

    #[test]
    fn test_two_generation_purpose_reason_bias() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);

        let draws = 10_000;
        let hits = (0..draws)
            .filter(|_| generator.reason_for(Purpose::TwoGenerationHouse, &mut rng) == reasons::TWO_GENERATION_HOME)
            .count();
        let freq = hits as f64 / draws as f64;
        assert!((0.65..=0.75).contains(&freq), "frequency was {}", freq);
    }

    #[test]
    fn test_commercial_purposes_lean_cash_and_large_plots() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ids = IdAllocator::new(EntityKind::Land);

        let mut commercial = 0;
        let mut cash = 0;
        for _ in 0..20_000 {
            let r = generator.purpose_first(&mut ids, None, &mut rng).unwrap();
            let purpose = r.purpose.unwrap();
            if purpose.is_business_or_investment() {
                commercial += 1;
                if r.method == Method::Cash {
                    cash += 1;
                }
                assert!(matches!(
                    r.land_area,
                    Some(LandArea::From151To300) | Some(LandArea::Over300)
                ));
            }
            if purpose == Purpose::Business {
                assert_eq!(r.reason, reasons::BUSINESS_LAND);
            }
        }
        assert!(commercial > 0);
        assert!(cash as f64 / commercial as f64 > 0.5);
    }

    #[test]
    fn test_purpose_first_plot_preferences() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ids = IdAllocator::new(EntityKind::Land);

        let mut parking = 0;
        let (mut small_household, mut small_plots) = (0, 0);
        let (mut quiet, mut far) = (0, 0);
        for _ in 0..100_000 {
            let r = generator.purpose_first(&mut ids, None, &mut rng).unwrap();
            let purpose = r.purpose.unwrap();
            let area = r.land_area.unwrap();
            let walking = r.walking_distance.unwrap();
            assert_ne!(area, LandArea::NoPreference);
            assert_ne!(walking, WalkingDistance::NoPreference);

            match purpose {
                Purpose::Parking => {
                    parking += 1;
                    assert_ne!(area, LandArea::UpTo50);
                }
                Purpose::TwoGenerationHouse => {
                    assert!(matches!(area, LandArea::From151To300 | LandArea::Over300));
                }
                Purpose::Business | Purpose::Investment => {}
                _ if r.family.is_small() => {
                    small_household += 1;
                    if matches!(area, LandArea::UpTo50 | LandArea::From51To150) {
                        small_plots += 1;
                    }
                }
                _ => {}
            }
            if r.reason == reasons::QUIET_ENVIRONMENT && !matches!(purpose, Purpose::Business | Purpose::Parking) {
                quiet += 1;
                if walking == WalkingDistance::Over21 {
                    far += 1;
                }
            }
        }

        assert!(parking > 1000);
        let small_share = small_plots as f64 / small_household as f64;
        assert!((0.45..=0.55).contains(&small_share), "small plot share was {}", small_share);
        let far_share = far as f64 / quiet as f64;
        assert!((0.35..=0.45).contains(&far_share), "far share was {}", far_share);
    }

    #[test]
    fn test_two_generation_reason_pulls_multi_generation_families() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ids = IdAllocator::new(EntityKind::Land);

        for _ in 0..5000 {
            let r = generator.purpose_first(&mut ids, None, &mut rng).unwrap();
            if r.reason == reasons::TWO_GENERATION_HOME {
                assert_ne!(r.family, Family::Single);
                assert_ne!(r.family, Family::Couple);
            }
        }
    }

    #[test]
    fn test_kind_specific_fields() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);

        let house = generator.family_first(&mut IdAllocator::new(EntityKind::House), &mut rng);
        assert!(house.building_age.is_some() && house.layout.is_some());
        assert!(house.purpose.is_none());
        assert!(house.land_area.is_some() && house.walking_distance.is_some());

        let land = generator.family_first(&mut IdAllocator::new(EntityKind::Land), &mut rng);
        assert!(land.purpose.is_some());
        assert!(land.building_age.is_none() && land.layout.is_none());

        let mansion = generator.family_first(&mut IdAllocator::new(EntityKind::Mansion), &mut rng);
        assert!(mansion.id.to_string().starts_with("TC-"));
        assert!(mansion.purpose.is_none() && mansion.land_area.is_none());
    }

    #[test]
    fn test_purpose_first_keeps_given_timing() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ids = IdAllocator::new(EntityKind::Land);

        for _ in 0..100 {
            let r = generator
                .purpose_first(&mut ids, Some(Timing::WithinOneYear), &mut rng)
                .unwrap();
            assert_eq!(r.timing, Timing::WithinOneYear);
        }
    }

    #[test]
    fn test_purpose_first_rejects_house() {
        let catalog = catalog();
        let generator = BuyerGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ids = IdAllocator::new(EntityKind::House);
        assert!(generator.generate(Strategy::PurposeFirst, &mut ids, &mut rng).is_err());
        assert_eq!(ids.issued(), 0);
    }
}
