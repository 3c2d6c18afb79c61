//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the last
//! fetched copies of API data; nothing here is authoritative.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Food, FoodRequest, FoodUpdate};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Public listings (available foods and home page)
    pub available_foods: Vec<Food>,
    /// Listings donated by the signed-in user
    pub my_foods: Vec<Food>,
    /// Requests made by the signed-in user
    pub my_requests: Vec<FoodRequest>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Merge an edit into every cached copy of the listing
pub fn store_update_food(store: &AppStore, food_id: &str, update: &FoodUpdate) {
    merge_update(&mut store.my_foods().write(), food_id, update);
    merge_update(&mut store.available_foods().write(), food_id, update);
}

/// Remove an own listing by ID
pub fn store_remove_food(store: &AppStore, food_id: &str) {
    store.my_foods().write().retain(|food| food.id != food_id);
    store.available_foods().write().retain(|food| food.id != food_id);
}

fn merge_update(foods: &mut [Food], food_id: &str, update: &FoodUpdate) {
    if let Some(food) = foods.iter_mut().find(|food| food.id == food_id) {
        food.apply_update(update);
    }
}

/// Drop everything tied to the signed-in user
pub fn store_clear_user_data(store: &AppStore) {
    store.my_foods().write().clear();
    store.my_requests().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, name: &str) -> Food {
        serde_json::from_value(serde_json::json!({ "_id": id, "name": name, "quantity": 1 }))
            .expect("valid listing")
    }

    #[test]
    fn test_update_reaches_every_cached_copy() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState {
                available_foods: vec![listing("a", "Soup"), listing("b", "Rice")],
                my_foods: vec![listing("a", "Soup")],
                my_requests: Vec::new(),
            });
            let update = FoodUpdate { name: "Lentil Soup".into(), quantity: 5, location: "Hall C".into() };

            store_update_food(&store, "a", &update);

            let mine = store.my_foods().get_untracked();
            let public = store.available_foods().get_untracked();
            assert_eq!(mine[0].name, "Lentil Soup");
            assert_eq!(public[0].name, "Lentil Soup");
            assert_eq!(public[0].quantity, 5);
            assert_eq!(public[1].name, "Rice");
        });
    }
}
