//! Request Commands
//!
//! Frontend bindings for food request endpoints.

use super::client;
use crate::models::{FoodRequest, NewFoodRequest};

pub async fn request_food(request: &NewFoodRequest) -> Result<(), String> {
    client().request_food(request).await.map_err(|e| {
        log::error!("[request] submit for {} failed: {}", request.food_id, e);
        e.user_message_or("Failed to send request. Please try again.")
    })
}

pub async fn my_requests() -> Result<Vec<FoodRequest>, String> {
    client().my_requests().await.map_err(|e| {
        log::error!("[request] list own failed: {}", e);
        e.user_message_or("Failed to load your requests.")
    })
}
