//! Route Guard Component
//!
//! Wraps protected views; anonymous visitors are sent to login with the
//! current path remembered for the return trip.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use food_share_core::routes;

use crate::context::use_auth;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    move || {
        if auth.loading.get() {
            return view! { <div class="loading">"Loading..."</div> }.into_any();
        }
        let path = location.pathname.get();
        match routes::guard(&path, auth.is_signed_in()).login_url() {
            None => children().into_any(),
            Some(login_url) => {
                log::debug!("[guard] redirecting {} to login", path);
                view! { <Redirect path=login_url /> }.into_any()
            }
        }
    }
}
