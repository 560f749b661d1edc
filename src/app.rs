//! Root application component: context providers, theme bootstrap, and the
//! window scroll listener that drives section highlighting.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    about::About, contact::Contact, education::Education, experience::Experience, footer::Footer,
    hero::Hero, nav_bar::NavBar, projects::Projects, skills::Skills,
};
use crate::state::section::NavState;
use crate::state::theme::ThemeState;
use crate::util;

/// Root application component.
///
/// Owns the two pieces of mutable state (theme preference, active section)
/// and provides them as contexts so consuming components share one writer
/// path per field instead of ambient globals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Resolve and apply the theme during mount, before the first paint is
    // observable, so the page never flashes the wrong mode.
    let theme = RwSignal::new(ThemeState { dark_mode: util::dark_mode::init() });
    let nav = RwSignal::new(NavState::default());
    provide_context(theme);
    provide_context(nav);

    register_scroll_tracker(nav);

    view! {
        <Title text="Barış Güngör | Portfolio"/>

        <NavBar/>
        <main>
            <Hero/>
            <About/>
            <Experience/>
            <Projects/>
            <Skills/>
            <Education/>
            <Contact/>
        </main>
        <Footer/>
    }
}

/// Attach the window scroll listener that keeps `NavState::active` in sync
/// with the section under the navigation bar, and detach it again when the
/// root component is torn down.
///
/// When no section contains the probe point the previous value is kept, so
/// overscroll past the footer never clears the highlight.
#[cfg(target_arch = "wasm32")]
fn register_scroll_tracker(nav: RwSignal<NavState>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::state::section;
    use crate::util::scroll;

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move || {
        let current = nav.get_untracked().active;
        let next = section::next_active(current, scroll::scroll_offset(), scroll::bounds_of);
        if next != current {
            nav.update(|n| n.active = next);
        }
    }) as Box<dyn FnMut()>);

    if window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not attach scroll listener; nav highlighting disabled");
        return;
    }

    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn register_scroll_tracker(_nav: RwSignal<NavState>) {}
