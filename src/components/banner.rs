//! Home Banner Component
//!
//! Auto-advancing slideshow. The interval is dropped with the component.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Time each slide stays up
const SLIDE_INTERVAL_MS: u32 = 5000;

pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        src: "https://i.ibb.co/zVMhwKnV/istockphoto-883729432-612x612.jpg",
        alt: "Community Food Sharing",
        heading: "Nourish Lives, Share Blessings",
        subheading: "Connect with local communities to reduce waste and fight hunger.",
    },
    Slide {
        src: "https://i.ibb.co/SXJtVgBF/istockphoto-1457738274-612x612.jpg",
        alt: "Fresh Produce Donation",
        heading: "Freshness Shared, Hearts Fulfilled",
        subheading: "Donate surplus produce and bring smiles to countless faces.",
    },
    Slide {
        src: "https://i.ibb.co/JjZZgyPv/istockphoto-472165353-612x612.jpg",
        alt: "Community Meal Program",
        heading: "Uniting Through Shared Meals",
        subheading: "Experience the joy of community and make a real difference, one meal at a time.",
    },
    Slide {
        src: "https://i.ibb.co/1JG3zj3L/istockphoto-1457433817-612x612.jpg",
        alt: "Sustainable Food Practices",
        heading: "Zero Waste, Maximum Impact",
        subheading: "Join our movement to reduce food waste and promote sustainable living.",
    },
];

#[component]
pub fn Banner() -> impl IntoView {
    let (current, set_current) = signal(0usize);
    let count = SLIDES.len();

    let interval = Interval::new(SLIDE_INTERVAL_MS, move || {
        set_current.try_update(|i| *i = (*i + 1) % count);
    });
    let interval = StoredValue::new_local(Some(interval));
    on_cleanup(move || {
        if let Some(Some(interval)) = interval.try_update_value(|slot| slot.take()) {
            interval.cancel();
        }
    });

    let go_prev = move |_| set_current.update(|i| *i = (*i + count - 1) % count);
    let go_next = move |_| set_current.update(|i| *i = (*i + 1) % count);

    view! {
        <section class="banner">
            {move || {
                let slide = &SLIDES[current.get()];
                view! {
                    <div class="banner-slide">
                        <img src=slide.src alt=slide.alt />
                        <div class="banner-caption">
                            <h1>{slide.heading}</h1>
                            <p>{slide.subheading}</p>
                        </div>
                    </div>
                }
            }}
            <button class="banner-nav prev" on:click=go_prev>"‹"</button>
            <button class="banner-nav next" on:click=go_next>"›"</button>
            <div class="banner-dots">
                {(0..count).map(|i| view! {
                    <button
                        class=move || if current.get() == i { "dot active" } else { "dot" }
                        on:click=move |_| set_current.set(i)
                    ></button>
                }).collect_view()}
            </div>
        </section>
    }
}
