//! Theme preference state and resolution logic.
//!
//! DESIGN
//! ======
//! The decision logic is pure: it takes the stored preference (already
//! decoded, `None` when absent or malformed) and the system color-scheme
//! answer as explicit inputs. All storage and DOM effects live in
//! `util::dark_mode` so this module stays testable without a browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Theme state shared via Leptos context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

/// Outcome of resolving the initial theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedTheme {
    /// The preference to apply and hold in memory.
    pub dark_mode: bool,
    /// Whether the resolved value must be written back to storage.
    ///
    /// Set only on first run (or after a malformed stored value), so later
    /// launches read the stored flag and skip the system query entirely.
    pub needs_persist: bool,
}

/// Resolve the initial theme preference.
///
/// A stored value wins outright. With no usable stored value, the system
/// preference decides and is persisted immediately.
pub fn resolve_initial(stored: Option<bool>, system_prefers_dark: bool) -> ResolvedTheme {
    match stored {
        Some(dark_mode) => ResolvedTheme { dark_mode, needs_persist: false },
        None => ResolvedTheme { dark_mode: system_prefers_dark, needs_persist: true },
    }
}
