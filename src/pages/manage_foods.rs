//! Manage Foods Page
//!
//! The signed-in donor's listings with edit and delete.
//! Edits are PATCHed then merged locally; deletes are confirmed first.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_share_core::forms::EditFoodForm;
use food_share_core::listing::format_expiry;

use crate::commands;
use crate::components::{ConfirmModal, Modal};
use crate::models::{food_image, Food};
use crate::store::{store_remove_food, store_update_food, use_app_store, AppStateStoreFields};
use crate::toast::use_toasts;

#[component]
pub fn ManageFoodsPage() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (loading, set_loading) = signal(true);

    // (listing id, form) while the edit modal is open
    let editing = RwSignal::new(None::<(String, EditFoodForm)>);
    // Listing id awaiting delete confirmation
    let deleting = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::my_foods().await {
                Ok(foods) => store.my_foods().set(foods),
                Err(msg) => toasts.error(msg),
            }
            set_loading.set(false);
        });
    });

    let start_edit = move |food: &Food| {
        editing.set(Some((food.id.clone(), EditFoodForm::from_food(food))));
    };

    let save_edit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((id, form)) = editing.get_untracked() else { return };
        let update = match form.to_update() {
            Ok(update) => update,
            Err(err) => {
                toasts.warn(err.user_message());
                return;
            }
        };
        spawn_local(async move {
            match commands::update_food(&id, &update).await {
                Ok(()) => {
                    store_update_food(&store, &id, &update);
                    editing.set(None);
                    toasts.success("Food item updated successfully!");
                }
                Err(msg) => toasts.error(msg),
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(id) = deleting.get_untracked() else { return };
        deleting.set(None);
        spawn_local(async move {
            match commands::delete_food(&id).await {
                Ok(()) => {
                    store_remove_food(&store, &id);
                    toasts.success("Food item deleted successfully!");
                }
                Err(msg) => toasts.error(msg),
            }
        });
    };

    view! {
        <section class="manage-foods">
            <h1>"Manage My Foods"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">"Loading..."</div> }>
                <Show
                    when=move || !store.my_foods().read().is_empty()
                    fallback=|| view! { <p class="empty">"You have not added any food yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Image"</th>
                                <th>"Name"</th>
                                <th>"Quantity"</th>
                                <th>"Pickup Location"</th>
                                <th>"Expire Date"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || store.my_foods().get()
                                // Key on the edited fields so merged edits re-render
                                key=|food| (food.id.clone(), food.name.clone(), food.quantity, food.location.clone())
                                children=move |food| {
                                    let id = food.id.clone();
                                    let edit_target = food.clone();
                                    view! {
                                        <tr>
                                            <td><img class="thumb" src=food_image(&food) alt="" /></td>
                                            <td>{food.name.clone()}</td>
                                            <td>{food.quantity}</td>
                                            <td>{food.location.clone()}</td>
                                            <td>{format_expiry(&food.expire_date)}</td>
                                            <td class="actions">
                                                <button class="btn small" on:click=move |_| start_edit(&edit_target)>"Edit"</button>
                                                <button class="btn small danger" on:click=move |_| deleting.set(Some(id.clone()))>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || editing.read().is_some()>
                <Modal title="Update Food" on_close=move |_| editing.set(None)>
                    <form class="food-form" on:submit=save_edit>
                        <label>
                            "Food Name"
                            <input
                                type="text"
                                prop:value=move || edit_field(editing, |f| f.name.clone())
                                on:input=move |ev| edit_form(editing, |f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Quantity"
                            <input
                                type="number"
                                prop:value=move || edit_field(editing, |f| f.quantity.clone())
                                on:input=move |ev| edit_form(editing, |f| f.quantity = event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Pickup Location"
                            <input
                                type="text"
                                prop:value=move || edit_field(editing, |f| f.location.clone())
                                on:input=move |ev| edit_form(editing, |f| f.location = event_target_value(&ev))
                            />
                        </label>
                        <div class="modal-actions">
                            <button class="btn secondary" type="button" on:click=move |_| editing.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn" type="submit">"Save"</button>
                        </div>
                    </form>
                </Modal>
            </Show>

            <Show when=move || deleting.read().is_some()>
                <ConfirmModal
                    title="Delete food"
                    message="Are you sure? This listing will be removed permanently."
                    confirm_label="Yes, delete it"
                    on_confirm=confirm_delete
                    on_cancel=move |_| deleting.set(None)
                />
            </Show>
        </section>
    }
}

// ========================
// Edit form helpers
// ========================

fn edit_field(editing: RwSignal<Option<(String, EditFoodForm)>>, read: impl Fn(&EditFoodForm) -> String) -> String {
    editing.read().as_ref().map(|(_, form)| read(form)).unwrap_or_default()
}

fn edit_form(editing: RwSignal<Option<(String, EditFoodForm)>>, write: impl FnOnce(&mut EditFoodForm)) {
    editing.update(|slot| {
        if let Some((_, form)) = slot {
            write(form);
        }
    });
}
