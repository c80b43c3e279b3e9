//! Floating action button: a toggled menu of section shortcuts that closes on
//! outside clicks and is raised once the page scrolls.

use crate::animate::{Animator, Tween};
use crate::constants::*;
use crate::core::{FabAction, FabEmphasis, FabMenu};
use crate::dom;
use crate::error::SiteError;
use crate::nav::Navigation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Fab {
    container: web::HtmlElement,
    main: web::HtmlElement,
    menu: RefCell<FabMenu>,
    animator: Rc<dyn Animator>,
}

impl Fab {
    fn show_open(&self, open: bool) {
        _ = self
            .container
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, open);
        let angle = if open { FAB_OPEN_ROTATION_DEG } else { 0.0 };
        self.animator.to(
            &self.main,
            Tween {
                duration: FAB_TWEEN_DURATION,
                ease: NAV_MORPH_EASE,
                props: &[("transform", format!("rotate({angle}deg)"))],
            },
            None,
        );
    }

    fn close(&self) {
        if self.menu.borrow_mut().close() {
            self.show_open(false);
        }
    }

    fn emphasize(&self, emphasis: FabEmphasis) {
        let (opacity, scale, ease) = match emphasis {
            FabEmphasis::Raised => (1.0, 1.0, NAV_MORPH_EASE),
            FabEmphasis::Resting => (FAB_RESTING_OPACITY, FAB_RESTING_SCALE, INDICATOR_EASE),
        };
        self.animator.to(
            &self.container,
            Tween {
                duration: FAB_TWEEN_DURATION,
                ease,
                props: &[
                    ("opacity", opacity.to_string()),
                    ("transform", format!("scale({scale})")),
                ],
            },
            None,
        );
    }

    fn press(&self, option: &web::HtmlElement) {
        let anim = self.animator.clone();
        let target = option.clone();
        self.animator.to(
            option,
            Tween {
                duration: FAB_PRESS_DURATION,
                ease: INDICATOR_EASE,
                props: &[("transform", format!("scale({FAB_PRESS_SCALE})"))],
            },
            Some(Box::new(move || {
                anim.to(
                    &target,
                    Tween {
                        duration: FAB_TWEEN_DURATION,
                        ease: NAV_MORPH_EASE,
                        props: &[("transform", "scale(1)".to_string())],
                    },
                    None,
                );
            })),
        );
    }
}

pub fn wire_fab(nav: &Navigation, animator: Rc<dyn Animator>) -> Result<(), SiteError> {
    let document = nav.document();
    let fab = Rc::new(Fab {
        container: dom::by_id(document, FAB_CONTAINER_ID)?,
        main: dom::by_id(document, FAB_MAIN_ID)?,
        menu: RefCell::new(FabMenu::default()),
        animator,
    });

    let fab_main = fab.clone();
    dom::add_listener(&fab.main, "click", move |_| {
        let open = fab_main.menu.borrow_mut().toggle();
        log::debug!("[fab] menu open: {open}");
        fab_main.show_open(open);
    });

    let options = dom::query_all::<web::HtmlElement>(document, FAB_OPTION_SELECTOR);
    for option in options {
        let fab_opt = fab.clone();
        let nav_opt = nav.clone();
        let el = option.clone();
        dom::add_listener(&option, "click", move |_| {
            fab_opt.press(&el);
            match el
                .get_attribute(DATA_ACTION_ATTR)
                .and_then(|a| FabAction::from_attr(&a))
            {
                Some(action) => {
                    nav_opt.go_to(action.target());
                }
                None => log::debug!("[fab] option without a known action"),
            }
            fab_opt.close();
        });
    }

    let fab_outside = fab.clone();
    dom::add_listener(document, "click", move |ev| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Node>().ok())
            .map(|n| fab_outside.container.contains(Some(&n)))
            .unwrap_or(false);
        if fab_outside.menu.borrow_mut().click_outside(inside) {
            fab_outside.show_open(false);
        }
    });

    let fab_scroll = fab.clone();
    let win = nav.window().clone();
    let apply = move || {
        let change = fab_scroll.menu.borrow_mut().scrolled(dom::scroll_y(&win));
        if let Some(emphasis) = change {
            fab_scroll.emphasize(emphasis);
        }
    };
    apply();
    dom::add_listener(nav.window(), "scroll", move |_| apply());

    log::info!("[fab] mounted");
    Ok(())
}
