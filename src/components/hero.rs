//! Full-height hero section with name, tagline, and call-to-action buttons.

use leptos::prelude::*;

use crate::content;
use crate::state::section::{NavState, Section};
use crate::util::scroll;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let go_to = move |section: Section| {
        if scroll::scroll_to(section) {
            nav.update(|n| n.active = section);
        }
    };

    view! {
        <section id="home" class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__name">{content::NAME}</h1>
                <h2 class="hero__tagline">{content::TAGLINE}</h2>
                <p class="hero__summary">{content::SUMMARY}</p>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| go_to(Section::About)>
                        "Learn More About Me"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| go_to(Section::Contact)>
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}
