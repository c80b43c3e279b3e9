use crate::core::constants::{RESIZE_SETTLE_MS, SCROLL_SETTLE_MS};
use crate::core::Debouncer;
use crate::dom::{self, BrowserTimers};
use crate::nav::Navigation;
use crate::progress::ScrollProgress;
use std::rc::Rc;
use web_sys as web;

/// Debounced scroll handling for the navigation mode and section marker.
pub fn wire_scroll(nav: &Navigation, timers: &Rc<BrowserTimers>) {
    let debounce = Debouncer::new(timers.clone(), SCROLL_SETTLE_MS);
    let nav_cb = nav.clone();
    dom::add_listener(nav.window(), "scroll", move |_| {
        let nav = nav_cb.clone();
        debounce.call(move || nav.on_scroll());
    });
}

/// The progress bar listens on its own so it works without the navigation.
pub fn wire_progress(window: &web::Window, progress: ScrollProgress, timers: &Rc<BrowserTimers>) {
    let debounce = Debouncer::new(timers.clone(), SCROLL_SETTLE_MS);
    let progress = Rc::new(progress);
    progress.update();
    dom::add_listener(window, "scroll", move |_| {
        let progress = progress.clone();
        debounce.call(move || progress.update());
    });
}

pub fn wire_resize(nav: &Navigation, timers: &Rc<BrowserTimers>) {
    let debounce = Debouncer::new(timers.clone(), RESIZE_SETTLE_MS);
    let nav_cb = nav.clone();
    dom::add_listener(nav.window(), "resize", move |_| {
        let nav = nav_cb.clone();
        debounce.call(move || nav.on_resize());
    });
}
