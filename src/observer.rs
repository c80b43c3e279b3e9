use crate::constants::OBSERVER_ROOT_MARGIN;
use crate::core::Section;
use crate::error::SiteError;
use crate::nav::{Navigation, SectionTracking};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Intersection-based section detection. Once mounted it owns active-section
/// tracking and the scroll marker stands down.
pub struct SectionObserver {
    observer: web::IntersectionObserver,
    nav: Navigation,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl SectionObserver {
    pub fn mount(nav: &Navigation) -> Result<Self, SiteError> {
        let nav_cb = nav.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Some(section) = Section::from_id(&entry.target().id()) {
                        log::debug!("[observer] {} in view", section.id());
                        nav_cb.set_active_section(section);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_root_margin(OBSERVER_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(0.0));
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        for el in nav.section_elements() {
            observer.observe(&el);
        }
        nav.set_tracking(SectionTracking::Observer);
        Ok(Self {
            observer,
            nav: nav.clone(),
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.nav.set_tracking(SectionTracking::ScrollMarker);
    }
}
