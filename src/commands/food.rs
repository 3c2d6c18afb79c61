//! Food Commands
//!
//! Frontend bindings for listing endpoints.

use food_share_core::NewFood;

use super::client;
use crate::models::{Food, FoodUpdate};

pub async fn list_available_foods() -> Result<Vec<Food>, String> {
    client().list_available_foods().await.map_err(|e| {
        log::error!("[food] list available failed: {}", e);
        e.user_message_or("Failed to load available foods.")
    })
}

pub async fn get_food(id: &str) -> Result<Food, String> {
    client().get_food(id).await.map_err(|e| {
        log::error!("[food] fetch {} failed: {}", id, e);
        e.user_message_or("Failed to load food details.")
    })
}

pub async fn add_food(food: &NewFood) -> Result<(), String> {
    client().add_food(food).await.map_err(|e| {
        log::error!("[food] add failed: {}", e);
        e.user_message_or("Failed to add food. Please try again.")
    })
}

pub async fn update_food(id: &str, update: &FoodUpdate) -> Result<(), String> {
    client().update_food(id, update).await.map_err(|e| {
        log::error!("[food] update {} failed: {}", id, e);
        e.user_message_or("Failed to update food item.")
    })
}

pub async fn delete_food(id: &str) -> Result<(), String> {
    client().delete_food(id).await.map_err(|e| {
        log::error!("[food] delete {} failed: {}", id, e);
        e.user_message_or("Failed to delete food item.")
    })
}

pub async fn my_foods() -> Result<Vec<Food>, String> {
    client().my_foods().await.map_err(|e| {
        log::error!("[food] list own failed: {}", e);
        e.user_message_or("Failed to load your food items.")
    })
}
