//! Home Page
//!
//! Banner, featured listings and a short explainer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use food_share_core::listing::featured;
use food_share_core::routes;

use crate::commands;
use crate::components::{Banner, FoodCard};
use crate::store::{use_app_store, AppStateStoreFields};

/// Listings shown in the featured section
const FEATURED_FOODS_LIMIT: usize = 6;

const STEPS: &[(&str, &str)] = &[
    ("List surplus food", "Share what you have left over, a few portions or a whole crate."),
    ("Get matched", "Neighbours browse available foods and request what they need."),
    ("Hand it over", "Meet at the pickup location before the food expires."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();

    // Load listings on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_available_foods().await {
                Ok(foods) => store.available_foods().set(foods),
                // Home stays usable without the featured section
                Err(msg) => log::warn!("[home] featured foods unavailable: {}", msg),
            }
        });
    });

    let featured_foods = Memo::new(move |_| {
        featured(&store.available_foods().read(), FEATURED_FOODS_LIMIT)
    });

    view! {
        <div class="home">
            <Banner />

            <section class="featured">
                <h2>"Featured Foods"</h2>
                <Show
                    when=move || !featured_foods.read().is_empty()
                    fallback=|| view! { <p class="empty">"No foods available right now."</p> }
                >
                    <div class="food-grid cols-3">
                        <For
                            each=move || featured_foods.get()
                            key=|food| food.id.clone()
                            children=|food| view! { <FoodCard food=food /> }
                        />
                    </div>
                </Show>
                <A href=routes::AVAILABLE_FOODS attr:class="btn">"Show All Foods"</A>
            </section>

            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <ol class="steps">
                    {STEPS.iter().map(|(title, text)| view! {
                        <li>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </li>
                    }).collect_view()}
                </ol>
            </section>
        </div>
    }
}
