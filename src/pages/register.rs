//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use food_share_core::forms::RegisterForm;
use food_share_core::routes;

use crate::context::{use_auth, SignUpOutcome};
use crate::toast::use_toasts;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let registration = match form.get_untracked().validate() {
            Ok(registration) => registration,
            Err(err) => {
                set_error.set(Some(err.user_message()));
                return;
            }
        };
        set_error.set(None);
        set_busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.sign_up(registration).await {
                SignUpOutcome::Registered => {
                    toasts.success("Registration successful!");
                    navigate(routes::HOME, Default::default());
                }
                SignUpOutcome::RegisteredWithoutProfile(msg) => {
                    toasts.warn(msg);
                    navigate(routes::HOME, Default::default());
                }
                SignUpOutcome::Failed(msg) => {
                    toasts.error(msg.clone());
                    set_error.set(Some(msg));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Register"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || form.read().name.clone()
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Photo URL"
                    <input
                        type="url"
                        prop:value=move || form.read().photo_url.clone()
                        on:input=move |ev| form.update(|f| f.photo_url = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || form.read().email.clone()
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || form.read().password.clone()
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button class="btn" type="submit" disabled=busy>"Register"</button>
            </form>

            <p class="auth-switch">
                "Already have an account? " <A href=routes::LOGIN>"Login"</A>
            </p>
        </section>
    }
}
