//! Header Component
//!
//! Navigation bar, sign-in state and a short welcome banner after login.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use food_share_core::routes::{self, visible_menu};

use crate::context::use_auth;
use crate::store::{store_clear_user_data, use_app_store};
use crate::toast::use_toasts;

/// How long the welcome banner stays visible
const WELCOME_MS: u32 = 5000;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (menu_open, set_menu_open) = signal(false);
    let (show_welcome, set_show_welcome) = signal(false);

    // Welcome banner: shown whenever a user appears, hidden after a while
    let welcome_timer = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        if auth.user.get().is_some() {
            set_show_welcome.set(true);
            let timer = Timeout::new(WELCOME_MS, move || {
                set_show_welcome.try_set(false);
            });
            // Replacing the old timeout drops (cancels) it
            welcome_timer.set_value(Some(timer));
        } else {
            set_show_welcome.set(false);
            welcome_timer.set_value(None);
        }
    });
    on_cleanup(move || {
        welcome_timer.try_update_value(|slot| slot.take());
    });

    let log_out = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.sign_out().await {
                Ok(()) => {
                    store_clear_user_data(&store);
                    toasts.success("Logged out.");
                    navigate(routes::HOME, Default::default());
                }
                Err(msg) => toasts.error(msg),
            }
        });
    };

    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <header class="site-header">
            {move || (show_welcome.get()).then(|| {
                let name = auth.user.get().map(|u| u.display_name_or("friend")).unwrap_or_default();
                view! {
                    <div class="welcome-banner">
                        "Welcome " {name} ". Now you can manage your foods."
                    </div>
                }
            })}
            <nav class="navbar">
                <A href=routes::HOME attr:class="logo">"FoodShare"</A>

                <button class="menu-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {move || visible_menu(auth.user.get().is_some()).into_iter().map(|item| view! {
                        <A href=item.path on:click=close_menu>{item.name}</A>
                    }).collect_view()}

                    {move || match auth.user.get() {
                        Some(user) => {
                            let title = user.display_name_or(&user.email);
                            view! {
                                <span class="user-box">
                                    {user.photo_url.clone().map(|src| view! {
                                        <img class="avatar" src=src alt="" title=title.clone() />
                                    })}
                                    <span class="user-name">{title.clone()}</span>
                                    <button class="logout-btn" on:click=log_out.clone()>"Logout"</button>
                                </span>
                            }.into_any()
                        }
                        None => view! {
                            <A href=routes::LOGIN on:click=close_menu>"Login"</A>
                            <A href=routes::REGISTER on:click=close_menu>"Register"</A>
                        }.into_any(),
                    }}
                </div>
            </nav>
        </header>
    }
}
