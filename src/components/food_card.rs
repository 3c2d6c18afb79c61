//! Food Card Component
//!
//! Summary tile for one listing.

use leptos::prelude::*;
use leptos_router::components::A;

use food_share_core::listing::format_expiry;
use food_share_core::routes;

use crate::models::{food_image, Food};

/// Summary tile. "View Details" goes through the route guard, so anonymous
/// visitors land on login and come back afterwards.
#[component]
pub fn FoodCard(food: Food) -> impl IntoView {
    let details = routes::food_details(&food.id);
    let image = food_image(&food);
    let expiry = format_expiry(&food.expire_date);
    let donor_image = food.donor_image.clone().filter(|url| !url.is_empty());

    view! {
        <article class="food-card">
            <img class="food-card-image" src=image alt=food.name.clone() />
            <div class="food-card-body">
                <h3>{food.name.clone()}</h3>
                <p class="food-meta">"Quantity: " {food.quantity}</p>
                <p class="food-meta">"Pickup: " {food.location.clone()}</p>
                <p class="food-meta">"Expires: " {expiry}</p>
                {(!food.notes.is_empty()).then(|| view! { <p class="food-notes">{food.notes.clone()}</p> })}
                <div class="donor">
                    {donor_image.map(|src| view! { <img class="avatar small" src=src alt="" /> })}
                    <span>{food.donor_name.clone()}</span>
                </div>
                <A href=details attr:class="btn">"View Details"</A>
            </div>
        </article>
    }
}
