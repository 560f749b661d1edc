#![cfg(not(target_arch = "wasm32"))]

use super::*;

// =============================================================
// JSON codec
// =============================================================

#[test]
fn decode_parses_stored_booleans() {
    assert_eq!(decode::<bool>("true"), Some(true));
    assert_eq!(decode::<bool>("false"), Some(false));
}

#[test]
fn decode_treats_malformed_input_as_absent() {
    assert_eq!(decode::<bool>("garbage"), None);
    assert_eq!(decode::<bool>(""), None);
    assert_eq!(decode::<bool>("1"), None);
    assert_eq!(decode::<bool>("\"true\""), None);
}

#[test]
fn encode_round_trips_through_decode() {
    let raw = encode(&true).unwrap();
    assert_eq!(raw, "true");
    assert_eq!(decode::<bool>(&raw), Some(true));
}

// =============================================================
// Native fallbacks
// =============================================================

#[test]
fn load_json_is_none_off_wasm() {
    assert_eq!(load_json::<bool>("anything"), None);
}

#[test]
fn save_json_is_noop_but_callable() {
    save_json("anything", &true);
}
