//! Food Request Entity
//!
//! A claim by one user against another user's listing.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::food::Food;

/// A request as listed under "my requests"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub food_id: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub donor_name: String,
    #[serde(default)]
    pub donor_email: String,
    #[serde(default)]
    pub donor_image: Option<String>,
    #[serde(default)]
    pub request_date: String,
    #[serde(default)]
    pub expire_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for submitting a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodRequest {
    pub food_id: String,
    pub donor_name: String,
    pub donor_email: String,
    pub user_email: String,
    pub request_date: String,
    pub expire_date: String,
    pub location: String,
    pub notes: String,
}

impl NewFoodRequest {
    pub fn for_food(food: &Food, requester_email: &str, notes: &str, now: DateTime<Utc>) -> Self {
        Self {
            food_id: food.id.clone(),
            donor_name: food.donor_name.clone(),
            donor_email: food.donor_email.clone(),
            user_email: requester_email.to_string(),
            request_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            expire_date: food.expire_date.clone(),
            location: food.location.clone(),
            notes: notes.trim().to_string(),
        }
    }
}
