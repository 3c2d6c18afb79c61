//! Food Listing Entity
//!
//! A surplus-food donation offered by a donor.

use serde::{Deserialize, Deserializer, Serialize};

/// Listing status as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    #[default]
    Available,
    Requested,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

impl FoodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStatus::Available => "available",
            FoodStatus::Requested => "requested",
            FoodStatus::Unknown => "unknown",
        }
    }
}

/// A food listing as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub location: String,
    /// Expiry timestamp, kept as the raw string the API sent
    #[serde(default)]
    pub expire_date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub donor_name: String,
    #[serde(default)]
    pub donor_email: String,
    #[serde(default)]
    pub donor_image: Option<String>,
    #[serde(default)]
    pub status: FoodStatus,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub request_count: i64,
}

impl Food {
    /// Merge the mutable fields of an update into this copy
    pub fn apply_update(&mut self, update: &FoodUpdate) {
        self.name = update.name.clone();
        self.quantity = update.quantity;
        self.location = update.location.clone();
    }

    /// Exact email match; the API stores addresses as the provider returns them
    pub fn is_donated_by(&self, email: &str) -> bool {
        !email.is_empty() && self.donor_email == email
    }
}

/// Payload for creating a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub quantity: i64,
    pub location: String,
    pub expire_date: String,
    pub notes: String,
    pub status: FoodStatus,
    pub donor_name: String,
    pub donor_email: String,
    pub donor_image: Option<String>,
    pub request_count: i64,
}

/// The fields a donor may change after listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodUpdate {
    pub name: String,
    pub quantity: i64,
    pub location: String,
}

/// Quantities arrive as numbers, numeric strings or null depending on who
/// wrote the record.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_sparse_listing() {
        let food: Food = serde_json::from_value(json!({
            "_id": "abc",
            "name": "Bread",
            "quantity": "12",
            "status": "archived"
        }))
        .unwrap();
        assert_eq!(food.id, "abc");
        assert_eq!(food.quantity, 12);
        assert_eq!(food.status, FoodStatus::Unknown);
        assert_eq!(food.request_count, 0);
        assert!(food.donor_image.is_none());
    }

    #[test]
    fn test_decode_null_quantity() {
        let food: Food = serde_json::from_value(json!({ "_id": "x", "quantity": null })).unwrap();
        assert_eq!(food.quantity, 0);
    }

    #[test]
    fn test_new_food_wire_names() {
        let payload = NewFood {
            name: "Rice".into(),
            image: String::new(),
            quantity: 3,
            location: "Dock 4".into(),
            expire_date: "2026-01-01T00:00:00Z".into(),
            notes: String::new(),
            status: FoodStatus::Available,
            donor_name: "Ana".into(),
            donor_email: "ana@example.com".into(),
            donor_image: None,
            request_count: 0,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["expireDate"], "2026-01-01T00:00:00Z");
        assert_eq!(value["donorEmail"], "ana@example.com");
        assert_eq!(value["status"], "available");
        assert_eq!(value["requestCount"], 0);
        assert!(value["donorImage"].is_null());
    }

    #[test]
    fn test_apply_update_keeps_other_fields() {
        let mut food: Food = serde_json::from_value(json!({
            "_id": "1", "name": "Old", "quantity": 1, "location": "A", "notes": "keep"
        }))
        .unwrap();
        food.apply_update(&FoodUpdate { name: "New".into(), quantity: 5, location: "B".into() });
        assert_eq!(food.name, "New");
        assert_eq!(food.quantity, 5);
        assert_eq!(food.location, "B");
        assert_eq!(food.notes, "keep");
    }
}
