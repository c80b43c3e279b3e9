use crate::constants::{ANCHOR_LINK_SELECTOR, CTA_BUTTON_SELECTOR};
use crate::core::actions::cta_target;
use crate::core::navigation::classify_swipe;
use crate::dom;
use crate::nav::Navigation;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Nav link clicks navigate to their `data-section` instead of following href.
pub fn wire_nav_links(nav: &Navigation) {
    for (link, section) in nav.link_targets() {
        let nav_cb = nav.clone();
        dom::add_listener(&link, "click", move |ev| {
            ev.prevent_default();
            log::debug!("[nav] link clicked: {}", section.id());
            nav_cb.go_to(section);
        });
    }
}

/// Hero call-to-action buttons jump to the section their label names.
pub fn wire_cta_buttons(nav: &Navigation) {
    let buttons = dom::query_all::<web::HtmlElement>(nav.document(), CTA_BUTTON_SELECTOR);
    for button in buttons {
        let nav_cb = nav.clone();
        let label_of = button.clone();
        dom::add_listener(&button, "click", move |_| {
            let label = label_of.text_content().unwrap_or_default();
            if let Some(section) = cta_target(&label) {
                log::debug!("[nav] cta -> {}", section.id());
                nav_cb.go_to(section);
            }
        });
    }
}

/// In-page `#id` anchors scroll smoothly, offset by the nav bar.
pub fn wire_anchor_links(nav: &Navigation) {
    let nav_cb = nav.clone();
    dom::add_listener(nav.document(), "click", move |ev| {
        // Nav links already handled this click.
        if ev.default_prevented() {
            return;
        }
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(ANCHOR_LINK_SELECTOR).ok().flatten())
        else {
            return;
        };
        ev.prevent_default();
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let target = nav_cb
            .document()
            .get_element_by_id(href.trim_start_matches('#'))
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if let Some(target) = target {
            nav_cb.scroll_to_element(&target);
        }
    });
}

fn touch_screen_y(ev: &web::Event) -> Option<f64> {
    let touch = ev.dyn_ref::<web::TouchEvent>()?.changed_touches().get(0)?;
    Some(touch.screen_y() as f64)
}

/// Vertical swipes step through sections: up for next, down for previous.
pub fn wire_swipe(nav: &Navigation) {
    let start_y = Rc::new(Cell::new(0.0_f64));

    let start = start_y.clone();
    dom::add_listener(nav.document(), "touchstart", move |ev| {
        if let Some(y) = touch_screen_y(&ev) {
            start.set(y);
        }
    });

    let nav_cb = nav.clone();
    dom::add_listener(nav.document(), "touchend", move |ev| {
        let Some(end_y) = touch_screen_y(&ev) else {
            return;
        };
        if let Some(swipe) = classify_swipe(start_y.get(), end_y) {
            let target = swipe.target(nav_cb.current_section());
            log::debug!("[nav] swipe {:?} -> {}", swipe, target.id());
            nav_cb.go_to(target);
        }
    });
}
