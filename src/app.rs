//! Food Share Frontend App
//!
//! Root component: shared state, routing and the page shell.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::commands;
use crate::components::{Header, RequireAuth, ToastHost};
use crate::context::AuthContext;
use crate::pages::{
    AddFoodPage, AvailableFoodsPage, FoodDetailsPage, HomePage, LoginPage, ManageFoodsPage,
    MyRequestsPage, NotFoundPage, RegisterPage,
};
use crate::store::{store_clear_user_data, AppState};
use crate::toast::Toasts;

#[component]
pub fn App() -> impl IntoView {
    // Cached identity renders immediately; `loading` holds protected views
    // back until it has been re-validated.
    let user = signal(commands::current_user());
    let loading = signal(true);

    let auth = AuthContext::new(user, loading);

    let store = Store::new(AppState::default());
    let toasts = Toasts::new();

    // Provide context to all children
    provide_context(auth);
    provide_context(store);
    provide_context(toasts);

    // A refresh can find the session dead during any request
    let _ = window_event_listener_untyped(commands::SESSION_EXPIRED_EVENT, move |_| {
        auth.expire();
        store_clear_user_data(&store);
        toasts.warn("Your session has expired. Please log in again.");
    });

    auth.restore();

    view! {
        <Router>
            <Header />
            <main class="main-content">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/registration") view=RegisterPage />
                    <Route path=path!("/available-foods") view=AvailableFoodsPage />
                    <Route
                        path=path!("/food/:id")
                        view=|| view! { <RequireAuth><FoodDetailsPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/add-food")
                        view=|| view! { <RequireAuth><AddFoodPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/manage-foods")
                        view=|| view! { <RequireAuth><ManageFoodsPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/my-requests")
                        view=|| view! { <RequireAuth><MyRequestsPage /></RequireAuth> }
                    />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}
