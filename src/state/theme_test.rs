use super::*;

// =============================================================
// ThemeState defaults
// =============================================================

#[test]
fn theme_state_defaults_to_light() {
    assert!(!ThemeState::default().dark_mode);
}

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn stored_preference_wins_and_skips_persist() {
    let resolved = resolve_initial(Some(true), false);
    assert!(resolved.dark_mode);
    assert!(!resolved.needs_persist);

    let resolved = resolve_initial(Some(false), true);
    assert!(!resolved.dark_mode);
    assert!(!resolved.needs_persist);
}

#[test]
fn missing_preference_falls_back_to_system_and_persists() {
    let resolved = resolve_initial(None, true);
    assert!(resolved.dark_mode);
    assert!(resolved.needs_persist);
}

#[test]
fn missing_preference_with_light_system_stays_light() {
    let resolved = resolve_initial(None, false);
    assert!(!resolved.dark_mode);
    assert!(resolved.needs_persist);
}

#[test]
fn stored_preference_ignores_system_answer() {
    // Matches a stored flag written on a machine with the opposite system
    // scheme: the stored value must short-circuit the query result.
    assert!(resolve_initial(Some(true), false).dark_mode);
    assert!(!resolve_initial(Some(false), true).dark_mode);
}
