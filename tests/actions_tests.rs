// Host-side tests for the floating action button and call-to-action logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod sections {
        include!("../src/core/sections.rs");
    }
    pub mod actions {
        include!("../src/core/actions.rs");
    }
}

use crate::core::actions::*;
use crate::core::sections::Section;

#[test]
fn fab_actions_map_to_sections() {
    assert_eq!(FabAction::from_attr("top").map(FabAction::target), Some(Section::Home));
    assert_eq!(
        FabAction::from_attr("contact").map(FabAction::target),
        Some(Section::Contact)
    );
    assert_eq!(
        FabAction::from_attr("projects").map(FabAction::target),
        Some(Section::Projects)
    );
    assert_eq!(FabAction::from_attr("writing"), None);
    assert_eq!(FabAction::from_attr(""), None);
}

#[test]
fn menu_toggles_and_closes() {
    let mut menu = FabMenu::default();
    assert!(!menu.is_open());
    assert!(menu.toggle());
    assert!(menu.is_open());
    assert!(!menu.toggle());

    menu.toggle();
    assert!(menu.close());
    assert!(!menu.is_open());
    // Closing a closed menu reports nothing to animate
    assert!(!menu.close());
}

#[test]
fn outside_click_only_closes_open_menu() {
    let mut menu = FabMenu::default();
    assert!(!menu.click_outside(false));

    menu.toggle();
    assert!(!menu.click_outside(true));
    assert!(menu.is_open());
    assert!(menu.click_outside(false));
    assert!(!menu.is_open());
}

#[test]
fn emphasis_follows_scroll_threshold() {
    assert_eq!(FabEmphasis::for_scroll(0.0), FabEmphasis::Resting);
    assert_eq!(FabEmphasis::for_scroll(200.0), FabEmphasis::Resting);
    assert_eq!(FabEmphasis::for_scroll(201.0), FabEmphasis::Raised);
}

#[test]
fn emphasis_reports_only_changes() {
    let mut menu = FabMenu::default();
    assert_eq!(menu.scrolled(0.0), Some(FabEmphasis::Resting));
    assert_eq!(menu.scrolled(50.0), None);
    assert_eq!(menu.scrolled(400.0), Some(FabEmphasis::Raised));
    assert_eq!(menu.scrolled(900.0), None);
    assert_eq!(menu.scrolled(10.0), Some(FabEmphasis::Resting));
}

#[test]
fn cta_labels_pick_targets() {
    assert_eq!(cta_target("View My Work"), Some(Section::Projects));
    assert_eq!(cta_target("  Get In Touch →"), Some(Section::Contact));
    assert_eq!(cta_target("Download CV"), None);
}
