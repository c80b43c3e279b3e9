// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn viewport_and_scroll_thresholds_are_ordered() {
    assert!(MOBILE_BREAKPOINT < SIDEBAR_MIN_WIDTH);
    assert!(SCROLL_THRESHOLD > 0.0);
    assert!(SCROLL_THRESHOLD < SIDEBAR_THRESHOLD);

    // Sidebar hugs the top; mobile bar is shorter than the full bar
    assert!(NAV_HEIGHT_SIDEBAR < NAV_HEIGHT_MOBILE);
    assert!(NAV_HEIGHT_MOBILE < NAV_HEIGHT_DEFAULT);

    assert!(SECTION_MARKER_FRACTION > 0.0 && SECTION_MARKER_FRACTION < 1.0);
    assert!(FAB_SCROLL_THRESHOLD > SCROLL_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn debounce_windows() {
    assert!(SCROLL_SETTLE_MS > 0);
    assert!(SCROLL_SETTLE_MS < RESIZE_SETTLE_MS);
    assert!(NOTIFY_HOLD_MS > RESIZE_SETTLE_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_profile_is_lighter_than_desktop() {
    assert!(MOBILE_PARTICLE_COUNT < DESKTOP_PARTICLE_COUNT);
    assert!(MOBILE_PARTICLE_SIZE_MAX < DESKTOP_PARTICLE_SIZE_MAX);
    assert!(MOBILE_PARTICLE_SPEED_MAX < DESKTOP_PARTICLE_SPEED_MAX);
    assert!(MOBILE_CONNECTION_DISTANCE < DESKTOP_CONNECTION_DISTANCE);
    assert!(MOBILE_POINTER_DISTANCE < DESKTOP_POINTER_DISTANCE);

    assert!(PARTICLE_SIZE_MIN < MOBILE_PARTICLE_SIZE_MAX);
    assert!(PARTICLE_SPEED_MIN < MOBILE_PARTICLE_SPEED_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_and_line_weights_stay_in_unit_range() {
    assert!(PARTICLE_OPACITY_MIN > 0.0);
    assert!(PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN <= 1.0);
    assert!(CONNECTION_ALPHA_BASE > 0.0 && CONNECTION_ALPHA_BASE <= 1.0);
    assert!(POINTER_LINK_ALPHA > 0.0 && POINTER_LINK_ALPHA <= 1.0);
    assert!(DAMPING_POINTER_ACTIVE < DAMPING_POINTER_IDLE);
    assert!(DAMPING_POINTER_IDLE < 1.0);
    assert!(VELOCITY_CAP_FACTOR >= 1.0);
    assert!(MAX_FRAMES_PER_STEP >= 1.0);
}

#[test]
fn palette_colors_are_hex() {
    for c in PARTICLE_PALETTE {
        assert_eq!(c.len(), 7);
        assert!(c.starts_with('#'));
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}

#[test]
fn mode_classes_match_nav_modes() {
    assert_eq!(MODE_CLASSES, ["mobile", "compact", "sidebar"]);
    assert!(NAV_MORPH_DURATION > INDICATOR_DURATION);
    assert!(NOTIFY_OUT_DURATION < NOTIFY_IN_DURATION);
    assert!(FAB_PRESS_SCALE < FAB_RESTING_SCALE && FAB_RESTING_SCALE < 1.0);
    assert!(FAB_RESTING_OPACITY > 0.0 && FAB_RESTING_OPACITY < 1.0);
}
