#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn scroll_offset_is_zero_off_wasm() {
    assert_eq!(scroll_offset(), 0.0);
}

#[test]
fn unmounted_sections_report_no_bounds() {
    for section in Section::ALL {
        assert_eq!(bounds_of(section), None);
    }
}

#[test]
fn scroll_to_unmounted_section_is_a_noop() {
    assert!(!scroll_to(Section::Contact));
}
