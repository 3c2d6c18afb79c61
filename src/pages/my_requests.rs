//! My Requests Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_share_core::listing::format_expiry;

use crate::commands;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::toast::use_toasts;

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::my_requests().await {
                Ok(requests) => store.my_requests().set(requests),
                Err(msg) => toasts.error(msg),
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="my-requests">
            <h1>"My Food Requests"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">"Loading..."</div> }>
                <Show
                    when=move || !store.my_requests().read().is_empty()
                    fallback=|| view! { <p class="empty">"You have not requested any food yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Donor"</th>
                                <th>"Pickup Location"</th>
                                <th>"Expire Date"</th>
                                <th>"Request Date"</th>
                                <th>"Notes"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || store.my_requests().get()
                                key=|request| request.id.clone()
                                children=|request| view! {
                                    <tr>
                                        <td>{request.donor_name.clone()}</td>
                                        <td>{request.location.clone()}</td>
                                        <td>{format_expiry(&request.expire_date)}</td>
                                        <td>{format_expiry(&request.request_date)}</td>
                                        <td>{request.notes.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}
