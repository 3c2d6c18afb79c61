//! Login Page
//!
//! Email/password and Google sign-in. On success the user goes back to the
//! page that sent them here (the `from` query parameter), or home.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use food_share_core::forms::LoginForm;
use food_share_core::routes;

use crate::context::use_auth;
use crate::toast::use_toasts;

/// Replaces the login entry so Back does not land on the form again
fn after_login() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let query = use_query_map();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let return_to = move || routes::login_redirect_target(query.read_untracked().get("from").as_deref());

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = LoginForm {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let (email, password) = match form.validate() {
                Ok(credentials) => credentials,
                Err(err) => {
                    set_error.set(Some(err.user_message()));
                    return;
                }
            };
            set_error.set(None);
            set_busy.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                match auth.sign_in(&email, &password).await {
                    Ok(()) => {
                        toasts.success("Logged in successfully!");
                        navigate(&return_to(), after_login());
                    }
                    Err(msg) => {
                        toasts.error(msg.clone());
                        set_error.set(Some(msg));
                    }
                }
                set_busy.set(false);
            });
        }
    };

    let on_google = move |_| {
        let navigate = navigate.clone();
        set_busy.set(true);
        spawn_local(async move {
            match auth.sign_in_with_google().await {
                Ok(()) => {
                    toasts.success("Logged in with Google!");
                    navigate(&return_to(), after_login());
                }
                Err(msg) => toasts.error(msg),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Login"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button class="btn" type="submit" disabled=busy>"Login"</button>
            </form>

            <div class="divider">"or"</div>
            <button class="btn google" disabled=busy on:click=on_google>"Continue with Google"</button>

            <p class="auth-switch">
                "New here? " <A href=routes::REGISTER>"Create an account"</A>
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_replaces_history_entry() {
        let options = after_login();
        assert!(options.replace);
        assert!(options.scroll);
    }
}
