//! Scroll position, section geometry, and smooth navigation.
//!
//! The section tracker in `state::section` is pure; this module supplies
//! its inputs from the live layout and performs the scroll action for nav
//! clicks. Outside the browser every read degrades to "nothing rendered".

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::section::{Section, SectionBounds};

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Vertical bounds of a section's rendered element, or `None` when the
/// element is not mounted.
pub fn bounds_of(section: Section) -> Option<SectionBounds> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?
            .document()?
            .get_element_by_id(section.id())?;
        let element: web_sys::HtmlElement = element.dyn_into().ok()?;
        Some(SectionBounds {
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = section;
        None
    }
}

/// Smooth-scroll the viewport to a section.
///
/// Returns `true` when the section's element exists and the scroll was
/// requested; `false` leaves the page untouched.
pub fn scroll_to(section: Section) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = section;
        false
    }
}
