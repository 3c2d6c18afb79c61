//! Available Foods Page
//!
//! All public listings with search, expiry sort and a column toggle.
//! Search term, order and layout are local to the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_share_core::listing::{GridColumns, ListingQuery, SortOrder};

use crate::commands;
use crate::components::FoodCard;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::toast::use_toasts;

#[component]
pub fn AvailableFoodsPage() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let (search, set_search) = signal(String::new());
    let (order, set_order) = signal(SortOrder::default());
    let (columns, set_columns) = signal(GridColumns::default());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_available_foods().await {
                Ok(foods) => store.available_foods().set(foods),
                Err(msg) => toasts.error(msg),
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let query = ListingQuery::new(search.get(), order.get());
        query.apply(&store.available_foods().read())
    });

    view! {
        <section class="available-foods">
            <h1>"Available Foods"</h1>

            <div class="listing-controls">
                <input
                    type="search"
                    placeholder="Search by food name..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button class="btn secondary" on:click=move |_| set_order.update(|o| *o = o.toggle())>
                    {move || order.get().label()}
                </button>
                <button class="btn secondary" on:click=move |_| set_columns.update(|c| *c = c.toggle())>
                    {move || match columns.get() {
                        GridColumns::Three => "Two Columns",
                        GridColumns::Two => "Three Columns",
                    }}
                </button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">"Loading..."</div> }>
                <Show
                    when=move || !visible.read().is_empty()
                    fallback=|| view! { <p class="empty">"No foods match your search."</p> }
                >
                    <div class=move || format!("food-grid cols-{}", columns.get().count())>
                        <For
                            each=move || visible.get()
                            key=|food| food.id.clone()
                            children=|food| view! { <FoodCard food=food /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
