//! Categorical vocabularies shared by every buyer record
//!
//! Each enum serializes to the exact Japanese label that the static page
//! generators and the search UI key on.

use serde::{Deserialize, Serialize};

/// Household composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Family {
    Single,
    Couple,
    CoupleOneChild,
    CoupleTwoChildren,
    CoupleThreeChildren,
    ThreeGenerations,
    WithParents,
}

label_enum!(Family {
    Single => "単身",
    Couple => "夫婦",
    CoupleOneChild => "夫婦+子供1人",
    CoupleTwoChildren => "夫婦+子供2人",
    CoupleThreeChildren => "夫婦+子供3人",
    ThreeGenerations => "三世代同居希望",
    WithParents => "親との同居予定",
});

impl Family {
    /// Single person or a couple without children
    pub fn is_small(self) -> bool {
        matches!(self, Family::Single | Family::Couple)
    }

    pub fn has_children(self) -> bool {
        matches!(
            self,
            Family::CoupleOneChild | Family::CoupleTwoChildren | Family::CoupleThreeChildren
        )
    }
}

/// Purchase urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Timing {
    Immediate,
    WithinThreeMonths,
    WithinSixMonths,
    WithinOneYear,
    Opportunistic,
}

label_enum!(Timing {
    Immediate => "即時",
    WithinThreeMonths => "3ヶ月以内",
    WithinSixMonths => "6ヶ月以内",
    WithinOneYear => "1年以内",
    Opportunistic => "良い物件があれば",
});

impl Timing {
    /// Map a timing label from older data files onto the current vocabulary.
    /// Anything unrecognised becomes [`Timing::Opportunistic`].
    pub fn from_legacy(label: &str) -> Self {
        match label {
            "3ヶ月後" => Timing::WithinThreeMonths,
            "6ヶ月後" => Timing::WithinSixMonths,
            "1年後" => Timing::WithinOneYear,
            "相談" => Timing::Opportunistic,
            other => Timing::from_label(other).unwrap_or(Timing::Opportunistic),
        }
    }
}

/// Financing method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Method {
    Cash,
    Mortgage,
    FamilyAssisted,
    TradeIn,
}

label_enum!(Method {
    Cash => "現金購入",
    Mortgage => "住宅ローン",
    FamilyAssisted => "親族の援助あり",
    TradeIn => "買い替え",
});

/// Intended use of a land plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Purpose {
    DetachedHouse,
    TwoGenerationHouse,
    RentalCombined,
    Business,
    Investment,
    Parking,
    Other,
}

label_enum!(Purpose {
    DetachedHouse => "戸建住宅",
    TwoGenerationHouse => "二世帯住宅",
    RentalCombined => "賃貸併用住宅",
    Business => "事業用地",
    Investment => "投資用地",
    Parking => "駐車場用地",
    Other => "その他",
});

impl Purpose {
    pub fn is_business_or_investment(self) -> bool {
        matches!(self, Purpose::Business | Purpose::Investment)
    }
}

/// Desired plot size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LandArea {
    UpTo50,
    From51To150,
    From151To300,
    Over300,
    NoPreference,
}

label_enum!(LandArea {
    UpTo50 => "〜50㎡",
    From51To150 => "51〜150㎡",
    From151To300 => "151〜300㎡",
    Over300 => "301㎡以上",
    NoPreference => "特に希望なし",
});

/// Walking time from the nearest station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum WalkingDistance {
    Within10,
    From11To15,
    From16To20,
    Over21,
    NoPreference,
}

label_enum!(WalkingDistance {
    Within10 => "駅徒歩10分以内",
    From11To15 => "駅徒歩11〜15分",
    From16To20 => "駅徒歩16〜20分",
    Over21 => "駅徒歩21分以上",
    NoPreference => "特に希望なし",
});

/// Acceptable building age for a used house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BuildingAge {
    UpTo15,
    From16To25,
    From26To35,
    Over36,
    NoPreference,
}

label_enum!(BuildingAge {
    UpTo15 => "築15年まで",
    From16To25 => "築16〜25年",
    From26To35 => "築26〜35年",
    Over36 => "築36年以上",
    NoPreference => "特に希望なし",
});

/// Desired floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Layout {
    NoPreference,
    UpTo2Ldk,
    From3To5Ldk,
    Over5Ldk,
}

label_enum!(Layout {
    NoPreference => "特に希望なし",
    UpTo2Ldk => "2LDKまで",
    From3To5Ldk => "3LDK〜5LDK",
    Over5Ldk => "5LDK以上",
});
