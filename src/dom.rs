use crate::core::Timers;
use crate::error::SiteError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window() -> Result<web::Window, SiteError> {
    web::window().ok_or(SiteError::NoWindow)
}

pub fn document(window: &web::Window) -> Result<web::Document, SiteError> {
    window.document().ok_or(SiteError::NoDocument)
}

/// Typed lookup by id; fails when the element is absent or of another type.
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Result<T, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType(format!("#{id}")))
}

pub fn query<T: JsCast>(root: &web::Document, selector: &str) -> Result<T, SiteError> {
    root.query_selector(selector)?
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType(selector.to_string()))
}

/// All matches of `selector` that are of type `T`, in document order.
pub fn query_all<T: JsCast>(root: &web::Document, selector: &str) -> Vec<T> {
    let list = match root.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("[dom] bad selector {selector}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect()
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Viewport size in logical CSS pixels.
pub fn viewport(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(crate::constants::REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        _ => false,
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("[dom] style {property} rejected: {e:?}");
    }
}

fn supports_smooth_scroll(document: &web::Document) -> bool {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| js_sys::Reflect::has(&el.style(), &"scrollBehavior".into()).unwrap_or(false))
        .unwrap_or(false)
}

/// Smooth-scroll the window to `top`, jumping instantly when smooth scrolling
/// is not supported.
pub fn scroll_window_to(window: &web::Window, top: f64) {
    let smooth = window
        .document()
        .map(|d| supports_smooth_scroll(&d))
        .unwrap_or(false);
    if smooth {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    } else {
        window.scroll_to_with_x_and_y(0.0, top);
    }
}

/// Size the canvas backing store to the viewport in logical pixels, so pointer
/// client coordinates map 1:1 onto canvas coordinates.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(1.0) as u32);
    canvas.set_height(height.max(1.0) as u32);
}

/// `setTimeout` backend for the shared debouncer.
///
/// Each armed timer owns its `Closure` in `live`, keyed by the browser handle.
/// Clearing a timer drops its closure (and everything the callback captured)
/// immediately; a fired closure is queued in `fired` and dropped on the next
/// `set`/`clear`, never while it is still running.
pub struct BrowserTimers {
    window: web::Window,
    live: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
    fired: Rc<RefCell<Vec<i32>>>,
}

impl BrowserTimers {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            live: RefCell::new(HashMap::new()),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn release_fired(&self) {
        let done: Vec<i32> = self.fired.borrow_mut().drain(..).collect();
        if done.is_empty() {
            return;
        }
        let mut live = self.live.borrow_mut();
        for h in done {
            live.remove(&h);
        }
    }
}

impl Timers for BrowserTimers {
    type Handle = i32;

    fn set(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Option<i32> {
        self.release_fired();
        let handle = Rc::new(Cell::new(None::<i32>));
        let own_handle = handle.clone();
        let fired = self.fired.clone();
        let mut pending = Some(f);
        let cb = Closure::wrap(Box::new(move || {
            if let Some(f) = pending.take() {
                f();
            }
            // Queued only after the callback ran, so a nested `set` cannot
            // release this closure mid-call.
            if let Some(h) = own_handle.get() {
                fired.borrow_mut().push(h);
            }
        }) as Box<dyn FnMut()>);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms as i32,
            ) {
            Ok(h) => {
                handle.set(Some(h));
                self.live.borrow_mut().insert(h, cb);
                Some(h)
            }
            Err(e) => {
                log::warn!("[dom] setTimeout failed: {e:?}");
                None
            }
        }
    }

    fn clear(&self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
        self.live.borrow_mut().remove(&handle);
        self.release_fired();
    }
}
