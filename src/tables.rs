//! Distribution tables for the two generation strategies
//!
//! Tables are plain data. Each one lists its modal option first, since a
//! draw that falls through resolves to the first entry. The conditioning
//! rules that pick between tables are methods on the strategy structs so the
//! generator reads as a straight pipeline.

use crate::catalog::IncomeTier;
use crate::sampler::{table, WeightedTable};
use crate::vocab::{BuildingAge, Family, LandArea, Layout, Method, Purpose, Timing, WalkingDistance};

/// Order in which a buyer's attributes are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Household first, then everything else mostly independently
    FamilyFirst,
    /// Land purpose first; reason, household, occupation, financing and plot
    /// preferences are all conditioned on it
    PurposeFirst,
}

/// Purchase reasons referenced by conditioning rules
pub mod reasons {
    pub const NEW_DETACHED_HOUSE: &str = "新築戸建を建てたい";
    pub const CUSTOM_BUILT_HOUSE: &str = "注文住宅を建てたい";
    pub const TWO_GENERATION_HOME: &str = "二世帯住宅を建てたい";
    pub const SCHOOL_DISTRICT: &str = "子供の学区";
    pub const NEAR_FAMILY_HOME: &str = "実家の近く";
    pub const LARGE_HOUSE: &str = "広い家を建てたい";
    pub const HOUSE_WITH_GARDEN: &str = "庭付きの家を建てたい";
    pub const ASSET_BUILDING: &str = "資産形成";
    pub const QUIET_ENVIRONMENT: &str = "静かな環境";
    pub const NEEDS_PARKING: &str = "駐車場が必要";
    pub const PETS: &str = "ペットを飼いたい";
    pub const REMOTE_WORK: &str = "リモートワーク環境";
    pub const FUTURE_RESALE: &str = "将来的な転売";
    pub const BUSINESS_LAND: &str = "事業用地として";
    pub const INVESTMENT_LAND: &str = "投資用地として";
}

use reasons::*;

/// Inclusive age range per household type
#[derive(Debug, Clone, Copy)]
pub struct AgeRanges(&'static [(Family, u8, u8)]);

impl AgeRanges {
    pub fn range(&self, family: Family) -> (u8, u8) {
        self.0
            .iter()
            .find(|(f, _, _)| *f == family)
            .map(|&(_, min, max)| (min, max))
            .unwrap_or((30, 50))
    }
}

pub const HOUSE_AGE_RANGES: AgeRanges = AgeRanges(&[
    (Family::Single, 25, 45),
    (Family::Couple, 30, 55),
    (Family::CoupleOneChild, 30, 50),
    (Family::CoupleTwoChildren, 30, 50),
    (Family::CoupleThreeChildren, 30, 50),
    (Family::ThreeGenerations, 35, 60),
    (Family::WithParents, 35, 60),
]);

pub const LAND_AGE_RANGES: AgeRanges = AgeRanges(&[
    (Family::Single, 28, 45),
    (Family::Couple, 30, 55),
    (Family::CoupleOneChild, 30, 50),
    (Family::CoupleTwoChildren, 32, 52),
    (Family::CoupleThreeChildren, 33, 53),
    (Family::ThreeGenerations, 35, 60),
    (Family::WithParents, 35, 60),
]);

const PURPOSE: &[(Purpose, f64)] = &[
    (Purpose::DetachedHouse, 70.0),
    (Purpose::TwoGenerationHouse, 12.0),
    (Purpose::RentalCombined, 5.0),
    (Purpose::Business, 3.0),
    (Purpose::Investment, 2.0),
    (Purpose::Parking, 3.0),
    (Purpose::Other, 5.0),
];

const LAND_TIMING: &[(Timing, f64)] = &[
    (Timing::WithinSixMonths, 30.0),
    (Timing::Immediate, 15.0),
    (Timing::WithinThreeMonths, 20.0),
    (Timing::WithinOneYear, 20.0),
    (Timing::Opportunistic, 15.0),
];

const LAND_REASON: &[(&str, f64)] = &[
    (NEW_DETACHED_HOUSE, 25.0),
    (CUSTOM_BUILT_HOUSE, 20.0),
    (SCHOOL_DISTRICT, 10.0),
    (NEAR_FAMILY_HOME, 8.0),
    (LARGE_HOUSE, 8.0),
    (HOUSE_WITH_GARDEN, 6.0),
    (ASSET_BUILDING, 5.0),
    (QUIET_ENVIRONMENT, 3.0),
    (TWO_GENERATION_HOME, 8.0),
    (NEEDS_PARKING, 2.0),
    (PETS, 2.0),
    (REMOTE_WORK, 1.0),
    (FUTURE_RESALE, 1.0),
    (BUSINESS_LAND, 0.5),
    (INVESTMENT_LAND, 0.5),
];

const LAND_NG: &[(&str, f64)] = &[
    ("特になし", 45.0),
    ("再建築不可", 8.0),
    ("接道不良", 8.0),
    ("隣地との境界未確定", 7.0),
    ("市街化調整区域", 6.0),
    ("傾斜地", 6.0),
    ("水害リスクエリア", 6.0),
    ("地盤が弱い", 5.0),
    ("墓地や葬儀場の近く", 4.0),
    ("高圧線下", 3.0),
    ("不整形地", 2.0),
];

const EVEN_WALKING: &[(WalkingDistance, f64)] = &[
    (WalkingDistance::Within10, 25.0),
    (WalkingDistance::From11To15, 25.0),
    (WalkingDistance::From16To20, 25.0),
    (WalkingDistance::Over21, 25.0),
];

/// Tables for family-first generation of one property kind
#[derive(Debug, Clone)]
pub struct FamilyFirstTables {
    pub family: WeightedTable<Family>,
    pub ages: AgeRanges,
    pub timing: WeightedTable<Timing>,
    pub method: WeightedTable<Method>,
    pub reason: WeightedTable<&'static str>,
    pub ng: WeightedTable<&'static str>,
    pub land_area_small_household: WeightedTable<LandArea>,
    pub land_area_other: WeightedTable<LandArea>,
    pub walking_distance: WeightedTable<WalkingDistance>,
    /// Only drawn for land buyers
    pub purpose: WeightedTable<Purpose>,
    /// Only drawn for house buyers
    pub building_age: WeightedTable<BuildingAge>,
    layout_single: WeightedTable<Layout>,
    layout_couple: WeightedTable<Layout>,
    layout_large_household: WeightedTable<Layout>,
    layout_other: WeightedTable<Layout>,
}

impl FamilyFirstTables {
    pub fn land() -> Self {
        Self {
            family: table(&[
                (Family::CoupleTwoChildren, 32.0),
                (Family::CoupleOneChild, 25.0),
                (Family::Couple, 12.0),
                (Family::CoupleThreeChildren, 12.0),
                (Family::Single, 8.0),
                (Family::ThreeGenerations, 6.0),
                (Family::WithParents, 5.0),
            ]),
            ages: LAND_AGE_RANGES,
            timing: table(LAND_TIMING),
            method: table(&[
                (Method::Mortgage, 50.0),
                (Method::Cash, 25.0),
                (Method::FamilyAssisted, 15.0),
                (Method::TradeIn, 10.0),
            ]),
            reason: table(LAND_REASON),
            ng: table(LAND_NG),
            land_area_small_household: table(&[
                (LandArea::From51To150, 35.0),
                (LandArea::UpTo50, 8.0),
                (LandArea::From151To300, 35.0),
                (LandArea::Over300, 7.0),
                (LandArea::NoPreference, 15.0),
            ]),
            land_area_other: table(&[
                (LandArea::From151To300, 40.0),
                (LandArea::UpTo50, 3.0),
                (LandArea::From51To150, 20.0),
                (LandArea::Over300, 22.0),
                (LandArea::NoPreference, 15.0),
            ]),
            walking_distance: table(&[
                (WalkingDistance::Within10, 25.0),
                (WalkingDistance::From11To15, 25.0),
                (WalkingDistance::From16To20, 20.0),
                (WalkingDistance::Over21, 10.0),
                (WalkingDistance::NoPreference, 20.0),
            ]),
            purpose: table(PURPOSE),
            building_age: table(&[
                (BuildingAge::UpTo15, 25.0),
                (BuildingAge::From16To25, 25.0),
                (BuildingAge::From26To35, 20.0),
                (BuildingAge::Over36, 10.0),
                (BuildingAge::NoPreference, 20.0),
            ]),
            layout_single: table(&[(Layout::UpTo2Ldk, 1.0), (Layout::NoPreference, 1.0)]),
            layout_couple: table(&[
                (Layout::UpTo2Ldk, 1.0),
                (Layout::From3To5Ldk, 1.0),
                (Layout::NoPreference, 1.0),
            ]),
            layout_large_household: table(&[
                (Layout::From3To5Ldk, 1.0),
                (Layout::Over5Ldk, 1.0),
                (Layout::NoPreference, 1.0),
            ]),
            layout_other: table(&[
                (Layout::From3To5Ldk, 45.0),
                (Layout::NoPreference, 30.0),
                (Layout::UpTo2Ldk, 10.0),
                (Layout::Over5Ldk, 15.0),
            ]),
        }
    }

    /// Used for house buyers and mansion buyers. Plot and station tables are
    /// the same as for land.
    pub fn house() -> Self {
        Self {
            family: table(&[
                (Family::CoupleTwoChildren, 30.0),
                (Family::CoupleOneChild, 25.0),
                (Family::Couple, 15.0),
                (Family::Single, 10.0),
                (Family::CoupleThreeChildren, 10.0),
                (Family::ThreeGenerations, 5.0),
                (Family::WithParents, 5.0),
            ]),
            ages: HOUSE_AGE_RANGES,
            timing: table(&[
                (Timing::WithinSixMonths, 30.0),
                (Timing::WithinThreeMonths, 25.0),
                (Timing::Immediate, 20.0),
                (Timing::WithinOneYear, 15.0),
                (Timing::Opportunistic, 10.0),
            ]),
            method: table(&[
                (Method::Mortgage, 60.0),
                (Method::Cash, 15.0),
                (Method::FamilyAssisted, 15.0),
                (Method::TradeIn, 10.0),
            ]),
            reason: table(&[
                ("通勤の利便性", 1.0),
                (SCHOOL_DISTRICT, 1.0),
                (NEAR_FAMILY_HOME, 1.0),
                ("広い家が欲しい", 1.0),
                ("庭付きの家が欲しい", 1.0),
                ("戸建に住みたい", 1.0),
                (ASSET_BUILDING, 1.0),
                ("両親との同居", 1.0),
                (QUIET_ENVIRONMENT, 1.0),
                (NEEDS_PARKING, 1.0),
                (PETS, 1.0),
                (REMOTE_WORK, 1.0),
            ]),
            ng: table(&[
                ("特になし", 50.0),
                ("再建築不可", 5.0),
                ("旧耐震基準", 6.0),
                ("接道不良", 5.0),
                ("事故物件", 6.0),
                ("隣地との境界未確定", 5.0),
                ("傾斜地", 5.0),
                ("水害リスクエリア", 6.0),
                ("墓地や葬儀場の近く", 5.0),
                ("大規模な修繕が必要", 7.0),
            ]),
            ..Self::land()
        }
    }

    pub fn land_area(&self, family: Family) -> &WeightedTable<LandArea> {
        if family.is_small() {
            &self.land_area_small_household
        } else {
            &self.land_area_other
        }
    }

    pub fn layout(&self, family: Family) -> &WeightedTable<Layout> {
        match family {
            Family::Single => &self.layout_single,
            Family::Couple => &self.layout_couple,
            Family::CoupleThreeChildren | Family::ThreeGenerations => &self.layout_large_household,
            _ => &self.layout_other,
        }
    }
}

/// Tables for purpose-first land generation
#[derive(Debug, Clone)]
pub struct PurposeFirstTables {
    pub purpose: WeightedTable<Purpose>,
    pub ages: AgeRanges,
    pub timing: WeightedTable<Timing>,
    pub ng: WeightedTable<&'static str>,
    /// Chance that a two-generation plot is bought to build a two-generation home
    pub two_generation_reason_rate: f64,
    /// Chance that a business or investment buyer is drawn from business owners
    pub business_owner_rate: f64,
    /// Chance that any other buyer is drawn from stable salaried occupations
    pub stable_income_rate: f64,
    reason_two_generation_fallback: WeightedTable<&'static str>,
    reason_parking: WeightedTable<&'static str>,
    reason_residential: WeightedTable<&'static str>,
    family_two_generation_reason: WeightedTable<Family>,
    family_commercial: WeightedTable<Family>,
    family_two_generation_purpose: WeightedTable<Family>,
    family_default: WeightedTable<Family>,
    method_high_income: WeightedTable<Method>,
    method_commercial: WeightedTable<Method>,
    method_stable: WeightedTable<Method>,
    method_default: WeightedTable<Method>,
    land_area_parking: WeightedTable<LandArea>,
    land_area_commercial: WeightedTable<LandArea>,
    land_area_large_household: WeightedTable<LandArea>,
    land_area_small_household: WeightedTable<LandArea>,
    land_area_spacious: WeightedTable<LandArea>,
    land_area_default: WeightedTable<LandArea>,
    walking_near_station: WeightedTable<WalkingDistance>,
    walking_even: WeightedTable<WalkingDistance>,
    walking_quiet: WeightedTable<WalkingDistance>,
}

/// Either a fixed reason or a table to draw one from
pub enum ReasonSource<'a> {
    Fixed(&'static str),
    Table(&'a WeightedTable<&'static str>),
    /// `reason` with the given probability, otherwise the fallback table
    Biased {
        reason: &'static str,
        rate: f64,
        fallback: &'a WeightedTable<&'static str>,
    },
}

impl PurposeFirstTables {
    pub fn land() -> Self {
        Self {
            purpose: table(PURPOSE),
            ages: LAND_AGE_RANGES,
            timing: table(LAND_TIMING),
            ng: table(LAND_NG),
            two_generation_reason_rate: 0.7,
            business_owner_rate: 0.6,
            stable_income_rate: 0.8,
            reason_two_generation_fallback: table(&[
                (NEAR_FAMILY_HOME, 40.0),
                (LARGE_HOUSE, 30.0),
                (CUSTOM_BUILT_HOUSE, 20.0),
                (NEW_DETACHED_HOUSE, 10.0),
            ]),
            reason_parking: table(&[
                (ASSET_BUILDING, 50.0),
                (NEEDS_PARKING, 30.0),
                (INVESTMENT_LAND, 20.0),
            ]),
            reason_residential: table(LAND_REASON),
            family_two_generation_reason: table(&[
                (Family::ThreeGenerations, 40.0),
                (Family::WithParents, 30.0),
                (Family::CoupleTwoChildren, 15.0),
                (Family::CoupleThreeChildren, 10.0),
                (Family::CoupleOneChild, 5.0),
            ]),
            family_commercial: table(&[
                (Family::Couple, 30.0),
                (Family::Single, 25.0),
                (Family::CoupleTwoChildren, 20.0),
                (Family::CoupleOneChild, 15.0),
                (Family::CoupleThreeChildren, 10.0),
            ]),
            family_two_generation_purpose: table(&[
                (Family::ThreeGenerations, 35.0),
                (Family::WithParents, 25.0),
                (Family::CoupleTwoChildren, 20.0),
                (Family::CoupleThreeChildren, 15.0),
                (Family::CoupleOneChild, 5.0),
            ]),
            family_default: table(&[
                (Family::CoupleTwoChildren, 32.0),
                (Family::CoupleOneChild, 25.0),
                (Family::Couple, 12.0),
                (Family::CoupleThreeChildren, 12.0),
                (Family::Single, 8.0),
                (Family::ThreeGenerations, 6.0),
                (Family::WithParents, 5.0),
            ]),
            method_high_income: table(&[
                (Method::Cash, 50.0),
                (Method::Mortgage, 30.0),
                (Method::FamilyAssisted, 15.0),
                (Method::TradeIn, 5.0),
            ]),
            method_commercial: table(&[
                (Method::Cash, 60.0),
                (Method::Mortgage, 25.0),
                (Method::FamilyAssisted, 10.0),
                (Method::TradeIn, 5.0),
            ]),
            method_stable: table(&[
                (Method::Mortgage, 60.0),
                (Method::FamilyAssisted, 20.0),
                (Method::Cash, 15.0),
                (Method::TradeIn, 5.0),
            ]),
            method_default: table(&[
                (Method::Mortgage, 50.0),
                (Method::Cash, 25.0),
                (Method::FamilyAssisted, 15.0),
                (Method::TradeIn, 10.0),
            ]),
            land_area_parking: table(&[
                (LandArea::From151To300, 50.0),
                (LandArea::From51To150, 40.0),
                (LandArea::Over300, 10.0),
            ]),
            land_area_commercial: table(&[
                (LandArea::Over300, 60.0),
                (LandArea::From151To300, 40.0),
            ]),
            land_area_large_household: table(&[
                (LandArea::From151To300, 50.0),
                (LandArea::Over300, 50.0),
            ]),
            land_area_small_household: table(&[
                (LandArea::From51To150, 40.0),
                (LandArea::From151To300, 40.0),
                (LandArea::UpTo50, 10.0),
                (LandArea::Over300, 10.0),
            ]),
            // 90% large plots, split 60/40 between the two large buckets
            land_area_spacious: table(&[
                (LandArea::From151To300, 54.0),
                (LandArea::Over300, 36.0),
                (LandArea::From51To150, 10.0),
            ]),
            land_area_default: table(&[
                (LandArea::From151To300, 45.0),
                (LandArea::From51To150, 25.0),
                (LandArea::Over300, 25.0),
                (LandArea::UpTo50, 5.0),
            ]),
            walking_near_station: table(&[
                (WalkingDistance::Within10, 40.0),
                (WalkingDistance::From11To15, 30.0),
                (WalkingDistance::From16To20, 15.0),
                (WalkingDistance::Over21, 15.0),
            ]),
            walking_even: table(EVEN_WALKING),
            walking_quiet: table(&[
                (WalkingDistance::Over21, 40.0),
                (WalkingDistance::From16To20, 25.0),
                (WalkingDistance::From11To15, 20.0),
                (WalkingDistance::Within10, 15.0),
            ]),
        }
    }

    pub fn reason(&self, purpose: Purpose) -> ReasonSource<'_> {
        match purpose {
            Purpose::TwoGenerationHouse => ReasonSource::Biased {
                reason: TWO_GENERATION_HOME,
                rate: self.two_generation_reason_rate,
                fallback: &self.reason_two_generation_fallback,
            },
            Purpose::Business => ReasonSource::Fixed(BUSINESS_LAND),
            Purpose::Investment => ReasonSource::Fixed(INVESTMENT_LAND),
            Purpose::Parking => ReasonSource::Table(&self.reason_parking),
            _ => ReasonSource::Table(&self.reason_residential),
        }
    }

    pub fn family(&self, purpose: Purpose, reason: &str) -> &WeightedTable<Family> {
        if reason == TWO_GENERATION_HOME {
            return &self.family_two_generation_reason;
        }
        match purpose {
            Purpose::Business | Purpose::Investment | Purpose::Parking => &self.family_commercial,
            Purpose::TwoGenerationHouse => &self.family_two_generation_purpose,
            _ => &self.family_default,
        }
    }

    pub fn method(&self, occupation: &str, purpose: Purpose) -> &WeightedTable<Method> {
        let tier = IncomeTier::of(occupation);
        if tier == IncomeTier::High {
            &self.method_high_income
        } else if purpose.is_business_or_investment() {
            &self.method_commercial
        } else if tier == IncomeTier::StableEmployment {
            &self.method_stable
        } else {
            &self.method_default
        }
    }

    pub fn land_area(&self, family: Family, purpose: Purpose, reason: &str) -> &WeightedTable<LandArea> {
        if purpose == Purpose::Parking {
            &self.land_area_parking
        } else if purpose.is_business_or_investment() {
            &self.land_area_commercial
        } else if purpose == Purpose::TwoGenerationHouse
            || matches!(family, Family::ThreeGenerations | Family::CoupleThreeChildren)
        {
            &self.land_area_large_household
        } else if family.is_small() {
            &self.land_area_small_household
        } else if [HOUSE_WITH_GARDEN, PETS, LARGE_HOUSE].contains(&reason) {
            &self.land_area_spacious
        } else {
            &self.land_area_default
        }
    }

    pub fn walking_distance(&self, reason: &str, purpose: Purpose) -> &WeightedTable<WalkingDistance> {
        if matches!(purpose, Purpose::Business | Purpose::Parking) {
            &self.walking_near_station
        } else if reason == QUIET_ENVIRONMENT {
            &self.walking_quiet
        } else {
            // school district and near-family reasons are indifferent, as is everyone else
            &self.walking_even
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_age_range_differs_by_kind() {
        assert_eq!(HOUSE_AGE_RANGES.range(Family::Single), (25, 45));
        assert_eq!(LAND_AGE_RANGES.range(Family::Single), (28, 45));
        for family in Family::ALL {
            let (min, max) = LAND_AGE_RANGES.range(*family);
            assert!(min <= max);
        }
    }

    #[test]
    fn test_family_first_tables_cover_their_vocabularies() {
        let house = FamilyFirstTables::house();
        assert_eq!(house.family.len(), Family::ALL.len());
        assert_eq!(house.reason.len(), 12);
        assert_eq!(house.ng.len(), 10);
        assert_eq!(house.building_age.len(), BuildingAge::ALL.len());
        assert_eq!(house.ages.range(Family::CoupleThreeChildren), (30, 50));

        let land = FamilyFirstTables::land();
        assert_eq!(land.reason.len(), 15);
        assert_eq!(land.ng.len(), 11);
        assert_eq!(land.purpose.len(), Purpose::ALL.len());
        assert_eq!(land.ages.range(Family::CoupleThreeChildren), (33, 53));
    }

    #[test]
    fn test_modal_option_is_listed_first() {
        let house = FamilyFirstTables::house();
        assert_eq!(*house.family.first(), Family::CoupleTwoChildren);
        assert_eq!(*house.method.first(), Method::Mortgage);
        assert_eq!(*house.ng.first(), "特になし");

        let tables = PurposeFirstTables::land();
        assert_eq!(*tables.purpose.first(), Purpose::DetachedHouse);
        assert_eq!(*tables.method("医師", Purpose::DetachedHouse).first(), Method::Cash);
    }

    #[test]
    fn test_layout_conditioning() {
        let house = FamilyFirstTables::house();
        assert_eq!(house.layout(Family::Single).len(), 2);
        assert!(house
            .layout(Family::ThreeGenerations)
            .values()
            .all(|l| *l != Layout::UpTo2Ldk));
        assert!(house.layout(Family::Single).values().all(|l| *l != Layout::Over5Ldk));
    }

    #[test]
    fn test_purpose_first_rules() {
        let tables = PurposeFirstTables::land();

        assert!(matches!(tables.reason(Purpose::Business), ReasonSource::Fixed(BUSINESS_LAND)));
        assert!(matches!(tables.reason(Purpose::Investment), ReasonSource::Fixed(INVESTMENT_LAND)));

        let commercial = tables.land_area(Family::Couple, Purpose::Investment, INVESTMENT_LAND);
        assert!(commercial
            .values()
            .all(|a| matches!(a, LandArea::From151To300 | LandArea::Over300)));

        let families = tables.family(Purpose::DetachedHouse, TWO_GENERATION_HOME);
        assert_eq!(*families.first(), Family::ThreeGenerations);

        assert_eq!(
            *tables.walking_distance(QUIET_ENVIRONMENT, Purpose::DetachedHouse).first(),
            WalkingDistance::Over21
        );
        assert_eq!(
            *tables.walking_distance(QUIET_ENVIRONMENT, Purpose::Parking).first(),
            WalkingDistance::Within10
        );
        assert_eq!(
            *tables.method("公務員（地方公務員）", Purpose::DetachedHouse).first(),
            Method::Mortgage
        );
        assert_eq!(*tables.method("会社員（一般）", Purpose::Business).first(), Method::Cash);
    }

    #[test]
    fn test_land_area_precedence() {
        let t = PurposeFirstTables::land();
        let picks = |family, purpose, reason, expected: &WeightedTable<LandArea>| {
            std::ptr::eq(t.land_area(family, purpose, reason), expected)
        };

        // parking beats every household and reason rule
        assert!(picks(Family::ThreeGenerations, Purpose::Parking, PETS, &t.land_area_parking));
        assert!(picks(Family::Single, Purpose::Parking, LARGE_HOUSE, &t.land_area_parking));

        // commercial beats household size
        assert!(picks(Family::CoupleThreeChildren, Purpose::Business, BUSINESS_LAND, &t.land_area_commercial));
        assert!(picks(Family::Single, Purpose::Investment, PETS, &t.land_area_commercial));

        // two-generation purpose or a large household beats a small family and a spacious reason
        assert!(picks(Family::Single, Purpose::TwoGenerationHouse, HOUSE_WITH_GARDEN, &t.land_area_large_household));
        assert!(picks(Family::ThreeGenerations, Purpose::DetachedHouse, ASSET_BUILDING, &t.land_area_large_household));
        assert!(picks(Family::CoupleThreeChildren, Purpose::Other, PETS, &t.land_area_large_household));

        // small household beats a spacious reason
        assert!(picks(Family::Couple, Purpose::DetachedHouse, LARGE_HOUSE, &t.land_area_small_household));
        assert!(picks(Family::Single, Purpose::RentalCombined, ASSET_BUILDING, &t.land_area_small_household));

        for reason in [HOUSE_WITH_GARDEN, PETS, LARGE_HOUSE] {
            assert!(picks(Family::CoupleOneChild, Purpose::DetachedHouse, reason, &t.land_area_spacious));
        }
        assert!(picks(Family::CoupleTwoChildren, Purpose::DetachedHouse, SCHOOL_DISTRICT, &t.land_area_default));
        assert!(picks(Family::WithParents, Purpose::Other, NEW_DETACHED_HOUSE, &t.land_area_default));
    }

    #[test]
    fn test_land_area_table_shapes() {
        let t = PurposeFirstTables::land();
        assert!(t
            .land_area_parking
            .values()
            .all(|a| !matches!(a, LandArea::UpTo50 | LandArea::NoPreference)));

        let mut rng = StdRng::seed_from_u64(42);
        let draws = 100_000;
        let small = (0..draws)
            .filter(|_| {
                matches!(
                    t.land_area_small_household.choose(&mut rng),
                    LandArea::UpTo50 | LandArea::From51To150
                )
            })
            .count();
        let freq = small as f64 / draws as f64;
        assert!((0.48..=0.52).contains(&freq), "small plot share was {}", freq);

        let spacious = &t.land_area_spacious;
        assert_eq!(spacious.total_weight(), 100.0);
        assert_eq!(*spacious.resolve(0.0), LandArea::From151To300);
        assert_eq!(*spacious.resolve(53.9), LandArea::From151To300);
        assert_eq!(*spacious.resolve(54.0), LandArea::Over300);
        assert_eq!(*spacious.resolve(89.9), LandArea::Over300);
        assert_eq!(*spacious.resolve(90.0), LandArea::From51To150);
    }

    #[test]
    fn test_walking_distance_selection() {
        let t = PurposeFirstTables::land();
        let picks = |reason, purpose, expected: &WeightedTable<WalkingDistance>| {
            std::ptr::eq(t.walking_distance(reason, purpose), expected)
        };

        assert!(picks(QUIET_ENVIRONMENT, Purpose::Business, &t.walking_near_station));
        assert!(picks(ASSET_BUILDING, Purpose::Parking, &t.walking_near_station));
        assert!(picks(INVESTMENT_LAND, Purpose::Investment, &t.walking_even));
        assert!(picks(QUIET_ENVIRONMENT, Purpose::DetachedHouse, &t.walking_quiet));
        assert!(picks(SCHOOL_DISTRICT, Purpose::DetachedHouse, &t.walking_even));
        assert!(picks(NEAR_FAMILY_HOME, Purpose::TwoGenerationHouse, &t.walking_even));

        let even = &t.walking_even;
        assert_eq!(even.len(), 4);
        assert_eq!(even.total_weight(), 100.0);
        assert!(even.values().all(|w| *w != WalkingDistance::NoPreference));
    }
}
