// Host-side tests for the navigation state machine and its helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod sections {
        include!("../src/core/sections.rs");
    }
    pub mod navigation {
        include!("../src/core/navigation.rs");
    }
}

use crate::core::navigation::*;
use crate::core::sections::{Section, SectionExtent};

fn state() -> NavState {
    NavState::new(NavThresholds::default())
}

#[test]
fn mode_follows_scroll_and_width() {
    let t = NavThresholds::default();
    assert_eq!(t.mode_for(0.0, 1200.0), NavMode::Normal);
    assert_eq!(t.mode_for(100.0, 1200.0), NavMode::Normal);
    assert_eq!(t.mode_for(150.0, 1200.0), NavMode::Compact);
    assert_eq!(t.mode_for(300.0, 1200.0), NavMode::Compact);
    assert_eq!(t.mode_for(350.0, 1200.0), NavMode::Sidebar);
    // Too narrow for the sidebar, scrolled far
    assert_eq!(t.mode_for(350.0, 900.0), NavMode::Compact);
    assert_eq!(t.mode_for(350.0, 1024.0), NavMode::Compact);
    // Mobile wins regardless of scroll
    for y in [0.0, 150.0, 5000.0] {
        assert_eq!(t.mode_for(y, 500.0), NavMode::Mobile);
    }
    assert_eq!(t.mode_for(0.0, 768.0), NavMode::Mobile);
    assert_eq!(t.mode_for(0.0, 769.0), NavMode::Normal);
}

#[test]
fn evaluate_reports_only_real_transitions() {
    let mut nav = state();
    assert_eq!(nav.mode(), NavMode::Normal);
    assert_eq!(nav.evaluate(0.0, 1200.0), None);

    let change = nav.evaluate(150.0, 1200.0).expect("normal -> compact");
    assert_eq!(change.from, NavMode::Normal);
    assert_eq!(change.to, NavMode::Compact);
    assert!(change.animates());
    assert!(nav.is_compact());

    // Repeating the same inputs must not re-fire the transition
    assert_eq!(nav.evaluate(160.0, 1200.0), None);

    let change = nav.evaluate(400.0, 1200.0).unwrap();
    assert_eq!(change.to, NavMode::Sidebar);
    assert!(nav.is_sidebar());

    let change = nav.evaluate(400.0, 600.0).unwrap();
    assert_eq!(change.to, NavMode::Mobile);
    assert!(!change.animates());
    assert!(nav.is_mobile());
}

#[test]
fn sidebar_drops_straight_back_when_scrolling_up() {
    let mut nav = state();
    nav.evaluate(500.0, 1400.0);
    assert!(nav.is_sidebar());
    assert_eq!(nav.evaluate(200.0, 1400.0).map(|c| c.to), Some(NavMode::Compact));
    assert_eq!(nav.evaluate(0.0, 1400.0).map(|c| c.to), Some(NavMode::Normal));
}

#[test]
fn enter_same_mode_is_noop() {
    let mut nav = state();
    assert_eq!(nav.enter(NavMode::Normal), None);
    assert!(nav.enter(NavMode::Compact).is_some());
    assert_eq!(nav.enter(NavMode::Compact), None);
}

#[test]
fn mode_class_names() {
    assert_eq!(NavMode::Normal.class_name(), None);
    assert_eq!(NavMode::Mobile.class_name(), Some("mobile"));
    assert_eq!(NavMode::Compact.class_name(), Some("compact"));
    assert_eq!(NavMode::Sidebar.class_name(), Some("sidebar"));
}

fn extents() -> Vec<SectionExtent> {
    vec![
        SectionExtent { section: Section::Home, top: 0.0, height: 800.0 },
        SectionExtent { section: Section::Projects, top: 800.0, height: 800.0 },
        SectionExtent { section: Section::Writing, top: 1600.0, height: 600.0 },
        SectionExtent { section: Section::Contact, top: 2200.0, height: 500.0 },
    ]
}

#[test]
fn active_section_uses_marker_a_third_down() {
    let marker = section_marker(700.0, 600.0);
    assert!((marker - 900.0).abs() < 1e-9);
    assert_eq!(active_section_at(&extents(), marker), Section::Projects);

    assert_eq!(active_section_at(&extents(), section_marker(0.0, 600.0)), Section::Home);
    assert_eq!(active_section_at(&extents(), 2300.0), Section::Contact);
}

#[test]
fn active_section_boundaries_are_half_open() {
    assert_eq!(active_section_at(&extents(), 799.9), Section::Home);
    assert_eq!(active_section_at(&extents(), 800.0), Section::Projects);
}

#[test]
fn active_section_defaults_to_home() {
    assert_eq!(active_section_at(&extents(), 10_000.0), Section::Home);
    assert_eq!(active_section_at(&[], 10.0), Section::Home);
}

#[test]
fn overlapping_extents_prefer_last_in_order() {
    let overlapping = vec![
        SectionExtent { section: Section::Home, top: 0.0, height: 1000.0 },
        SectionExtent { section: Section::Writing, top: 500.0, height: 1000.0 },
    ];
    assert_eq!(active_section_at(&overlapping, 700.0), Section::Writing);
}

#[test]
fn set_active_reports_changes() {
    let mut nav = state();
    assert_eq!(nav.current_section(), Section::Home);
    assert!(!nav.set_active(Section::Home));
    assert!(nav.set_active(Section::Writing));
    assert_eq!(nav.current_section(), Section::Writing);
    assert!(!nav.set_active(Section::Writing));
}

#[test]
fn nav_bar_height_depends_on_mode_and_width() {
    let mut nav = state();
    assert_eq!(nav.nav_bar_height(1200.0), 80.0);
    assert_eq!(nav.nav_bar_height(600.0), 70.0);
    nav.enter(NavMode::Sidebar);
    assert_eq!(nav.nav_bar_height(1200.0), 20.0);
    nav.enter(NavMode::Compact);
    assert_eq!(nav.nav_bar_height(1200.0), 80.0);
}

#[test]
fn scroll_target_offsets_by_nav_height() {
    let nav = state();
    // Contact at document y 2400 on a desktop viewport in normal mode
    assert_eq!(nav.scroll_target(2400.0, 1200.0), 2320.0);
    assert_eq!(nav.scroll_target(2400.0, 600.0), 2330.0);
}

#[test]
fn go_to_activates_and_targets_below_nav_bar() {
    let mut nav = state();
    let jump = nav.go_to(Section::Contact, &extents(), 1200.0).expect("contact is on the page");
    assert_eq!(jump.section, Section::Contact);
    assert!(jump.changed);
    assert_eq!(jump.scroll_top, 2200.0 - 80.0);
    assert_eq!(nav.current_section(), Section::Contact);

    // Jumping again keeps the section and reports no change
    let again = nav.go_to(Section::Contact, &extents(), 600.0).unwrap();
    assert!(!again.changed);
    assert_eq!(again.scroll_top, 2200.0 - 70.0);
}

#[test]
fn go_to_absent_section_leaves_state_untouched() {
    let mut nav = state();
    nav.set_active(Section::Projects);
    let without_contact: Vec<_> = extents()
        .into_iter()
        .filter(|e| e.section != Section::Contact)
        .collect();
    assert_eq!(nav.go_to(Section::Contact, &without_contact, 1200.0), None);
    assert_eq!(nav.current_section(), Section::Projects);
    assert_eq!(nav.mode(), NavMode::Normal);
}

#[test]
fn go_to_in_sidebar_uses_slim_offset() {
    let mut nav = state();
    nav.evaluate(500.0, 1400.0);
    let jump = nav.go_to(Section::Writing, &extents(), 1400.0).unwrap();
    assert_eq!(jump.scroll_top, 1600.0 - 20.0);
}

#[test]
fn focus_ring_wraps_both_ways() {
    assert_eq!(next_focus_index(0, 4, false), Some(1));
    assert_eq!(next_focus_index(3, 4, false), Some(0));
    assert_eq!(next_focus_index(0, 4, true), Some(3));
    assert_eq!(next_focus_index(2, 4, true), Some(1));
    assert_eq!(next_focus_index(0, 1, false), Some(0));
}

#[test]
fn focus_ring_ignores_focus_outside_links() {
    assert_eq!(next_focus_index(0, 0, false), None);
    assert_eq!(next_focus_index(5, 4, false), None);
}

#[test]
fn swipe_needs_more_than_threshold() {
    assert_eq!(classify_swipe(500.0, 450.0), None);
    assert_eq!(classify_swipe(500.0, 550.0), None);
    assert_eq!(classify_swipe(500.0, 449.0), Some(Swipe::Up));
    assert_eq!(classify_swipe(500.0, 551.0), Some(Swipe::Down));
}

#[test]
fn swipe_targets_wrap() {
    assert_eq!(Swipe::Up.target(Section::Home), Section::Projects);
    assert_eq!(Swipe::Up.target(Section::Contact), Section::Home);
    assert_eq!(Swipe::Down.target(Section::Home), Section::Contact);
    assert_eq!(Swipe::Down.target(Section::Writing), Section::Projects);
}

#[test]
fn key_commands() {
    assert_eq!(key_command("Tab", false, false), Some(KeyCommand::FocusNextLink));
    assert_eq!(key_command("Tab", false, true), Some(KeyCommand::FocusPreviousLink));
    assert_eq!(key_command("ArrowDown", true, false), Some(KeyCommand::NextSection));
    assert_eq!(key_command("ArrowUp", true, false), Some(KeyCommand::PreviousSection));
    assert_eq!(key_command("Home", true, false), Some(KeyCommand::Jump(Section::Home)));
    assert_eq!(key_command("End", true, false), Some(KeyCommand::Jump(Section::Contact)));
    // Plain arrows keep their native scrolling
    assert_eq!(key_command("ArrowDown", false, false), None);
    assert_eq!(key_command("End", false, false), None);
    assert_eq!(key_command("a", true, false), None);
}

#[test]
fn scroll_progress_is_clamped() {
    assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(1000.0, 3000.0, 1000.0), 50.0);
    assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    // Overscroll
    assert_eq!(scroll_progress_percent(2500.0, 3000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress_percent(-40.0, 3000.0, 1000.0), 0.0);
    // Page shorter than the viewport
    assert_eq!(scroll_progress_percent(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(0.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn sections_round_trip_ids_and_order() {
    for s in Section::ALL {
        assert_eq!(Section::from_id(s.id()), Some(s));
        assert_eq!(s.next().previous(), s);
    }
    assert_eq!(Section::from_id("blog"), None);
    assert_eq!(Section::Contact.next(), Section::Home);
    assert_eq!(Section::Home.previous(), Section::Contact);
}
