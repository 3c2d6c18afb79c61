use leptos::prelude::*;
use leptos_router::components::A;

use food_share_core::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href=routes::HOME attr:class="btn">"Back to Home"</A>
        </section>
    }
}
