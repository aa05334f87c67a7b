// Host-side tests for web frontend constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_valid() {
    let ids = [CANVAS_ID, HINT_OVERLAY_ID, ERROR_OVERLAY_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' ') && !a.starts_with('#'), "bad id {a:?}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_is_within_reasonable_bounds() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(FPS_LOG_INTERVAL_SEC > 0.0);
    assert_eq!(ORBIT_POINTER_BUTTON, 0);
}

#[test]
fn overlays_do_not_block_input() {
    assert!(HINT_STYLE.contains("pointer-events: none"));
    assert!(HINT_STYLE.contains("position: fixed"));
    assert!(ERROR_STYLE.contains("position: fixed"));
}
