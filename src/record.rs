//! The buyer record written to scope files

use crate::id::{BuyerId, EntityKind};
use crate::vocab::{BuildingAge, Family, LandArea, Layout, Method, Purpose, Timing, WalkingDistance};
use serde::{Deserialize, Serialize};

/// One synthetic buyer.
///
/// Field order here is the serialized order. Property-specific fields are
/// omitted when absent: land buyers carry `purpose`, house buyers carry
/// `buildingAge` and `layout`, both carry `landArea` and `walkingDistance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerRecord {
    pub id: BuyerId,
    pub family: Family,
    #[serde(with = "age_label")]
    pub age: u8,
    pub occupation: String,
    pub timing: Timing,
    pub method: Method,
    pub reason: String,
    pub ng: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Purpose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_age: Option<BuildingAge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_area: Option<LandArea>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walking_distance: Option<WalkingDistance>,
}

impl BuyerRecord {
    pub fn kind(&self) -> EntityKind {
        self.id.kind()
    }

    /// Decade bucket of the buyer's age (20, 30, ...)
    pub fn age_decade(&self) -> u8 {
        (self.age / 10) * 10
    }
}

/// Ages are stored as integers and written the way the pages display them,
/// e.g. `"35歳"`. Plain numbers are accepted on read.
pub mod age_label {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const SUFFIX: &str = "歳";

    pub fn serialize<S>(age: &u8, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}{}", age, SUFFIX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum AgeInput {
            Label(String),
            Number(u8),
        }

        match AgeInput::deserialize(deserializer)? {
            AgeInput::Label(raw) => raw
                .trim()
                .trim_end_matches(SUFFIX)
                .parse::<u8>()
                .map_err(|_| D::Error::custom(format!("invalid age: {raw}"))),
            AgeInput::Number(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn land_record() -> BuyerRecord {
        BuyerRecord {
            id: BuyerId::new(EntityKind::Land, 12),
            family: Family::Couple,
            age: 41,
            occupation: "会社員（一般）".to_string(),
            timing: Timing::WithinSixMonths,
            method: Method::Mortgage,
            reason: "新築戸建を建てたい".to_string(),
            ng: "特になし".to_string(),
            purpose: Some(Purpose::DetachedHouse),
            building_age: None,
            layout: None,
            land_area: Some(LandArea::From151To300),
            walking_distance: Some(WalkingDistance::Within10),
        }
    }

    #[test]
    fn test_field_order_and_labels() {
        let json = serde_json::to_string(&land_record()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"TO-00012","family":"夫婦","age":"41歳","occupation":"会社員（一般）","timing":"6ヶ月以内","method":"住宅ローン","reason":"新築戸建を建てたい","ng":"特になし","purpose":"戸建住宅","landArea":"151〜300㎡","walkingDistance":"駅徒歩10分以内"}"#
        );
    }

    #[test]
    fn test_age_accepts_number_or_label() {
        let mut value = serde_json::to_value(land_record()).unwrap();
        value["age"] = serde_json::json!(38);
        let parsed: BuyerRecord = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(parsed.age, 38);

        value["age"] = serde_json::json!("abc歳");
        assert!(serde_json::from_value::<BuyerRecord>(value).is_err());
    }

    #[test]
    fn test_age_decade() {
        let mut record = land_record();
        assert_eq!(record.age_decade(), 40);
        record.age = 29;
        assert_eq!(record.age_decade(), 20);
        assert_eq!(record.kind(), EntityKind::Land);
    }
}
