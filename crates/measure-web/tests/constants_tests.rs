// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        VIDEO_ID,
        CANVAS_ID,
        START_BUTTON_ID,
        CAPTURE_BUTTON_ID,
        RESET_BUTTON_ID,
        INSTRUCTIONS_ID,
        READOUT_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn index_page_provides_every_element() {
    let html = include_str!("../static/index.html");
    for id in [
        VIDEO_ID,
        CANVAS_ID,
        START_BUTTON_ID,
        CAPTURE_BUTTON_ID,
        RESET_BUTTON_ID,
        INSTRUCTIONS_ID,
        READOUT_ID,
    ] {
        assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
    }
}

#[test]
fn resize_listens_for_rotation() {
    assert!(RESIZE_EVENTS.contains(&"orientationchange"));
    assert!(RESIZE_EVENTS.contains(&"resize"));
}
