#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn init_defaults_to_light_off_wasm() {
    // No storage and no media query outside the browser.
    assert!(!init());
}

#[test]
fn toggle_twice_restores_original_value() {
    let original = false;
    let flipped = toggle(original);
    assert!(flipped);
    assert_eq!(toggle(flipped), original);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
