use crate::constants::{DATA_SRC_ATTR, LAZY_CLASS, LAZY_IMAGE_SELECTOR};
use crate::dom;
use crate::error::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Swap `data-src` into `src` once an image scrolls into view.
pub struct LazyImages {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

fn reveal(img: &web::HtmlImageElement) {
    if let Some(src) = img.get_attribute(DATA_SRC_ATTR) {
        img.set_src(&src);
    }
    _ = img.class_list().remove_1(LAZY_CLASS);
}

impl LazyImages {
    /// Observe every `img[data-src]`. Without IntersectionObserver support the
    /// images load right away and the error is returned for logging.
    pub fn mount(document: &web::Document) -> Result<Self, SiteError> {
        let images = dom::query_all::<web::HtmlImageElement>(document, LAZY_IMAGE_SELECTOR);

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(img) = target.dyn_ref::<web::HtmlImageElement>() {
                        reveal(img);
                    }
                    obs.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let observer = match web::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(o) => o,
            Err(e) => {
                images.iter().for_each(reveal);
                return Err(e.into());
            }
        };
        for img in &images {
            observer.observe(img);
        }
        log::debug!("[lazy] watching {} images", images.len());
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
