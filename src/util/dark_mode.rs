//! Dark mode initialization and toggle.
//!
//! Resolves the startup preference from `localStorage` (falling back to the
//! system color scheme on first run), applies the `.dark-mode` class to the
//! `<html>` element, and persists every change. Runs during mount, before
//! the browser paints, so the page never flashes the wrong theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme;
use crate::util::storage;

const STORAGE_KEY: &str = "darkMode";

/// Resolve, apply, and (on first run) persist the theme preference.
///
/// A stored flag wins; otherwise the system preference decides and is
/// written back so later launches skip the media query. A stored value
/// that fails to parse counts as absent.
pub fn init() -> bool {
    let stored = storage::load_json::<bool>(STORAGE_KEY);
    let resolved = theme::resolve_initial(stored, system_prefers_dark());
    apply(resolved.dark_mode);
    if resolved.needs_persist {
        storage::save_json(STORAGE_KEY, &resolved.dark_mode);
    }
    log::debug!(
        "theme initialized: dark_mode={} (stored={stored:?})",
        resolved.dark_mode
    );
    resolved.dark_mode
}

/// Toggle dark mode, persisting the new preference and updating the
/// document in the same step.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_json(STORAGE_KEY, &next);
    next
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark-mode");
                } else {
                    let _ = class_list.remove_1("dark-mode");
                }
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = enabled;
    }
}

/// Whether the host reports `prefers-color-scheme: dark`. Defaults to
/// light when the query is unavailable.
fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
