//! Add Food Page
//!
//! Listing form. Donor fields come from the signed-in profile.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_share_core::forms::{AddFoodForm, UNKNOWN_DONOR};

use crate::commands;
use crate::context::use_auth;
use crate::toast::use_toasts;

#[component]
pub fn AddFoodPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let form = RwSignal::new(AddFoodForm::default());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.user.get_untracked() else {
            toasts.error("Please log in to add food.");
            return;
        };
        let new_food = match form.get_untracked().into_new_food(&user) {
            Ok(food) => food,
            Err(err) => {
                toasts.warn(err.user_message());
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            match commands::add_food(&new_food).await {
                Ok(()) => {
                    toasts.success("Food added successfully!");
                    form.set(AddFoodForm::default());
                }
                Err(msg) => toasts.error(msg),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="add-food">
            <h1>"Add Food"</h1>
            <form class="food-form" on:submit=on_submit>
                <label>
                    "Food Name"
                    <input
                        type="text"
                        prop:value=move || form.read().name.clone()
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Food Image URL"
                    <input
                        type="url"
                        prop:value=move || form.read().image.clone()
                        on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Quantity"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.read().quantity.clone()
                        on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Pickup Location"
                    <input
                        type="text"
                        prop:value=move || form.read().location.clone()
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Expired Date/Time"
                    <input
                        type="datetime-local"
                        prop:value=move || form.read().expire_date.clone()
                        on:input=move |ev| form.update(|f| f.expire_date = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Additional Notes"
                    <textarea
                        prop:value=move || form.read().notes.clone()
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    />
                </label>

                // Donor info is read-only
                {move || auth.user.get().map(|user| view! {
                    <fieldset class="donor-info" disabled=true>
                        <legend>"Donor"</legend>
                        <input type="text" prop:value=user.display_name_or(UNKNOWN_DONOR) />
                        <input type="email" prop:value=user.email.clone() />
                    </fieldset>
                })}

                <button class="btn" type="submit" disabled=busy>
                    {move || if busy.get() { "Adding..." } else { "Add Food" }}
                </button>
            </form>
        </section>
    }
}
