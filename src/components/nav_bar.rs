//! Fixed top navigation bar with section links and the theme toggle.

use leptos::prelude::*;

use crate::content;
use crate::state::section::{NavState, Section};
use crate::state::theme::ThemeState;
use crate::util::{dark_mode, scroll};

/// Navigation bar pinned to the top of the page.
///
/// One button per section, highlighted while that section is in view.
/// Clicking a link smooth-scrolls to the section and marks it active
/// immediately, without waiting for the scroll tracker to catch up.
#[component]
pub fn NavBar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let on_toggle = move |_| {
        theme.update(|t| t.dark_mode = dark_mode::toggle(t.dark_mode));
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <span class="nav-bar__brand">{content::NAME}</span>
                <div class="nav-bar__links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let link_class = move || {
                                if nav.get().active == section {
                                    "nav-bar__link nav-bar__link--active"
                                } else {
                                    "nav-bar__link"
                                }
                            };
                            view! {
                                <button
                                    class=link_class
                                    on:click=move |_| {
                                        if scroll::scroll_to(section) {
                                            nav.update(|n| n.active = section);
                                        }
                                    }
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button class="nav-bar__theme-toggle" aria-label="Toggle theme" on:click=on_toggle>
                    <Show when=move || theme.get().dark_mode fallback=|| view! { <MoonIcon/> }>
                        <SunIcon/>
                    </Show>
                </button>
            </div>
        </nav>
    }
}

/// Sun glyph shown while dark mode is on.
#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg class="nav-bar__icon" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0zm-.464 4.95l.707.707a1 1 0 001.414-1.414l-.707-.707a1 1 0 00-1.414 1.414zm2.12-10.607a1 1 0 010 1.414l-.706.707a1 1 0 11-1.414-1.414l.707-.707a1 1 0 011.414 0zM17 11a1 1 0 100-2h-1a1 1 0 100 2h1zm-7 4a1 1 0 011 1v1a1 1 0 11-2 0v-1a1 1 0 011-1zM5.05 6.464A1 1 0 106.465 5.05l-.708-.707a1 1 0 00-1.414 1.414l.707.707zm1.414 8.486l-.707.707a1 1 0 01-1.414-1.414l.707-.707a1 1 0 011.414 1.414zM4 11a1 1 0 100-2H3a1 1 0 000 2h1z"
            ></path>
        </svg>
    }
}

/// Moon glyph shown while light mode is on.
#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg class="nav-bar__icon" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path d="M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z"></path>
        </svg>
    }
}
