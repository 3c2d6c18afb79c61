//! Food Details Page
//!
//! One listing, plus the request flow: eligibility check, a confirmation
//! modal with notes, then a single POST.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use food_share_core::forms::check_request_eligibility;
use food_share_core::listing::format_expiry;

use crate::commands;
use crate::components::Modal;
use crate::context::use_auth;
use crate::models::{food_image, Food, NewFoodRequest};
use crate::toast::use_toasts;

#[component]
pub fn FoodDetailsPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let params = use_params_map();

    let food = RwSignal::new(None::<Food>);
    let (loading, set_loading) = signal(true);
    let (show_modal, set_show_modal) = signal(false);
    let (notes, set_notes) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Refetch whenever the id segment changes
    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else {
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match commands::get_food(&id).await {
                Ok(found) => food.set(Some(found)),
                Err(msg) => {
                    food.set(None);
                    toasts.error(msg);
                }
            }
            set_loading.set(false);
        });
    });

    let open_request = move |_| {
        let Some(current) = food.get_untracked() else { return };
        let user = auth.user.get_untracked();
        match check_request_eligibility(user.as_ref(), &current) {
            Ok(()) => {
                set_notes.set(String::new());
                set_show_modal.set(true);
            }
            Err(err) => toasts.warn(err.user_message()),
        }
    };

    let submit_request = move |_| {
        let (Some(current), Some(user)) = (food.get_untracked(), auth.user.get_untracked()) else {
            return;
        };
        let request = NewFoodRequest::for_food(&current, &user.email, &notes.get_untracked(), Utc::now());

        // Shown immediately, undone if the POST fails
        food.update(|f| {
            if let Some(f) = f {
                f.request_count += 1;
            }
        });
        set_submitting.set(true);

        spawn_local(async move {
            match commands::request_food(&request).await {
                Ok(()) => {
                    toasts.success("Food requested successfully!");
                    set_show_modal.set(false);
                }
                Err(msg) => {
                    food.update(|f| {
                        if let Some(f) = f {
                            f.request_count -= 1;
                        }
                    });
                    toasts.error(msg);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="food-details">
            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Loading..."</div> }.into_any();
                }
                let Some(current) = food.get() else {
                    return view! { <p class="empty">"Food not found."</p> }.into_any();
                };
                let donor_image = current.donor_image.clone().filter(|url| !url.is_empty());
                view! {
                    <div class="details-card">
                        <img class="details-image" src=food_image(&current) alt=current.name.clone() />
                        <div class="details-body">
                            <h1>{current.name.clone()}</h1>
                            <p>"Quantity: " {current.quantity}</p>
                            <p>"Pickup location: " {current.location.clone()}</p>
                            <p>"Expires: " {format_expiry(&current.expire_date)}</p>
                            <p>"Status: " {current.status.as_str()}</p>
                            <p>"Requests so far: " {current.request_count}</p>
                            {(!current.notes.is_empty()).then(|| view! {
                                <p class="food-notes">{current.notes.clone()}</p>
                            })}
                            <div class="donor">
                                {donor_image.map(|src| view! { <img class="avatar" src=src alt="" /> })}
                                <div>
                                    <p class="donor-name">{current.donor_name.clone()}</p>
                                    <p class="donor-email">{current.donor_email.clone()}</p>
                                </div>
                            </div>
                            <button class="btn" on:click=open_request>"Request Food"</button>
                        </div>
                    </div>
                }.into_any()
            }}

            <Show when=move || show_modal.get()>
                <Modal title="Request this food" on_close=move |_| set_show_modal.set(false)>
                    {move || food.get().map(|current| view! {
                        <dl class="request-summary">
                            <dt>"Food"</dt><dd>{current.name.clone()}</dd>
                            <dt>"Donor"</dt><dd>{current.donor_name.clone()} " (" {current.donor_email.clone()} ")"</dd>
                            <dt>"Pickup"</dt><dd>{current.location.clone()}</dd>
                            <dt>"Expires"</dt><dd>{format_expiry(&current.expire_date)}</dd>
                            <dt>"Your email"</dt><dd>{auth.user.get().map(|u| u.email).unwrap_or_default()}</dd>
                        </dl>
                    })}
                    <label>
                        "Additional notes"
                        <textarea
                            prop:value=notes
                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="modal-actions">
                        <button class="btn secondary" on:click=move |_| set_show_modal.set(false)>"Cancel"</button>
                        <button class="btn" disabled=submitting on:click=submit_request>
                            {move || if submitting.get() { "Requesting..." } else { "Request" }}
                        </button>
                    </div>
                </Modal>
            </Show>
        </section>
    }
}
