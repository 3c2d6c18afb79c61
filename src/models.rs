//! Frontend Models
//!
//! Re-exports of the shared domain types, plus view-only helpers.

pub use food_share_core::domain::{Food, FoodRequest, FoodUpdate, NewFoodRequest, UserProfile};

/// Placeholder shown when a listing has no usable image
pub const FALLBACK_FOOD_IMAGE: &str = "/public/food-placeholder.svg";

/// Image URL for a listing, falling back to the placeholder
pub fn food_image(food: &Food) -> String {
    if food.image.trim().is_empty() {
        FALLBACK_FOOD_IMAGE.to_string()
    } else {
        food.image.clone()
    }
}
