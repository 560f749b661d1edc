use super::*;

/// Three contiguous sections laid out at known offsets.
fn contiguous_layout(section: Section) -> Option<SectionBounds> {
    match section {
        Section::Home => Some(SectionBounds { top: 0.0, height: 800.0 }),
        Section::About => Some(SectionBounds { top: 800.0, height: 800.0 }),
        Section::Experience => Some(SectionBounds { top: 1600.0, height: 800.0 }),
        _ => None,
    }
}

// =============================================================
// Section identifiers
// =============================================================

#[test]
fn sections_are_declared_in_display_order() {
    let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(
        ids,
        ["home", "about", "experience", "projects", "skills", "education", "contact"]
    );
}

#[test]
fn section_ids_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_id(section.id()), Some(section));
    }
}

#[test]
fn unknown_id_resolves_to_none() {
    assert_eq!(Section::from_id("nonexistent"), None);
    assert_eq!(Section::from_id(""), None);
}

#[test]
fn nav_state_starts_at_home() {
    assert_eq!(NavState::default().active, Section::Home);
}

// =============================================================
// SectionBounds
// =============================================================

#[test]
fn bounds_include_top_and_exclude_end() {
    let bounds = SectionBounds { top: 800.0, height: 800.0 };
    assert!(bounds.contains(800.0));
    assert!(bounds.contains(1599.9));
    assert!(!bounds.contains(1600.0));
    assert!(!bounds.contains(799.9));
}

// =============================================================
// section_at
// =============================================================

#[test]
fn probe_point_selects_containing_section() {
    // Offset 750 probes at 850, inside about's [800, 1600).
    assert_eq!(section_at(750.0, contiguous_layout), Some(Section::About));
}

#[test]
fn top_of_page_selects_home() {
    assert_eq!(section_at(0.0, contiguous_layout), Some(Section::Home));
}

#[test]
fn probe_above_all_sections_finds_nothing() {
    // Offset -150 probes at -50, above the first section.
    assert_eq!(section_at(-150.0, contiguous_layout), None);
}

#[test]
fn probe_past_last_section_finds_nothing() {
    assert_eq!(section_at(100_000.0, contiguous_layout), None);
}

#[test]
fn unmounted_sections_are_skipped() {
    // Only experience reports bounds; probing inside it still resolves.
    let sparse = |section: Section| match section {
        Section::Experience => Some(SectionBounds { top: 1600.0, height: 800.0 }),
        _ => None,
    };
    assert_eq!(section_at(1700.0, sparse), Some(Section::Experience));
    assert_eq!(section_at(0.0, sparse), None);
}

#[test]
fn overlapping_bounds_resolve_to_earlier_section() {
    let overlapping = |section: Section| match section {
        Section::Home => Some(SectionBounds { top: 0.0, height: 1000.0 }),
        Section::About => Some(SectionBounds { top: 500.0, height: 1000.0 }),
        _ => None,
    };
    // Probe 900 is inside both; home is declared first and wins.
    assert_eq!(section_at(800.0, overlapping), Some(Section::Home));
}

// =============================================================
// next_active
// =============================================================

#[test]
fn next_active_follows_the_probe() {
    assert_eq!(next_active(Section::Home, 750.0, contiguous_layout), Section::About);
    assert_eq!(
        next_active(Section::About, 1650.0, contiguous_layout),
        Section::Experience
    );
}

#[test]
fn next_active_retains_current_when_nothing_matches() {
    // A stale out-of-range offset must not clobber the last valid value.
    assert_eq!(next_active(Section::About, 100_000.0, contiguous_layout), Section::About);
    assert_eq!(next_active(Section::About, -150.0, contiguous_layout), Section::About);
}

#[test]
fn next_active_retains_current_with_no_layout() {
    // Before the layout settles no section reports bounds.
    assert_eq!(next_active(Section::Home, 400.0, |_| None), Section::Home);
}
