//! Tween engine boundary.
//!
//! The page may load GSAP, possibly after this module mounted, so every tween
//! looks for `window.gsap.to` first. Otherwise a CSS transition is set on the
//! target, the values are written straight into inline styles and the
//! completion callback fires after the tween duration.

use crate::dom;
use js_sys::{Function, Object, Reflect};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Tween<'a> {
    pub duration: f64,
    pub ease: &'static str,
    /// CSS property/value pairs, e.g. `("left", "24px")`.
    pub props: &'a [(&'static str, String)],
}

pub type OnComplete = Box<dyn FnOnce()>;

pub trait Animator {
    fn to(&self, target: &web::HtmlElement, tween: Tween<'_>, on_complete: Option<OnComplete>);
}

pub struct GsapAnimator {
    gsap: JsValue,
    to_fn: Function,
}

impl GsapAnimator {
    pub fn detect(window: &web::Window) -> Option<Self> {
        let gsap = Reflect::get(window, &"gsap".into()).ok()?;
        if gsap.is_undefined() || gsap.is_null() {
            return None;
        }
        let to_fn = Reflect::get(&gsap, &"to".into())
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some(Self { gsap, to_fn })
    }
}

fn camel_case(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len());
    let mut upper = false;
    for c in prop.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl Animator for GsapAnimator {
    fn to(&self, target: &web::HtmlElement, tween: Tween<'_>, on_complete: Option<OnComplete>) {
        let vars = Object::new();
        _ = Reflect::set(&vars, &"duration".into(), &tween.duration.into());
        _ = Reflect::set(&vars, &"ease".into(), &tween.ease.into());
        for (k, v) in tween.props {
            _ = Reflect::set(&vars, &camel_case(k).into(), &v.as_str().into());
        }
        if let Some(done) = on_complete {
            let cb = Closure::once_into_js(move || done());
            _ = Reflect::set(&vars, &"onComplete".into(), &cb);
        }
        if let Err(e) = self.to_fn.call2(&self.gsap, target, &vars) {
            log::warn!("[animate] gsap.to failed: {:?}", e);
        }
    }
}

pub struct StyleAnimator {
    window: web::Window,
}

impl StyleAnimator {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Animator for StyleAnimator {
    fn to(&self, target: &web::HtmlElement, tween: Tween<'_>, on_complete: Option<OnComplete>) {
        if !tween.props.is_empty() {
            let transition = tween
                .props
                .iter()
                .map(|(k, _)| format!("{k} {}s ease", tween.duration))
                .collect::<Vec<_>>()
                .join(", ");
            dom::set_style(target, "transition", &transition);
            // Flush layout so the transition starts from the current values.
            _ = target.offset_width();
        }
        for (k, v) in tween.props {
            dom::set_style(target, k, v);
        }
        if let Some(done) = on_complete {
            let cb = Closure::once_into_js(move || done());
            let ms = (tween.duration * 1000.0) as i32;
            _ = self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
        }
    }
}

/// Routes each tween to GSAP when the page has it at that moment, to inline
/// styles otherwise.
pub struct PageAnimator {
    window: web::Window,
    fallback: StyleAnimator,
    using_gsap: Cell<Option<bool>>,
}

impl PageAnimator {
    pub fn new(window: &web::Window) -> Self {
        Self {
            window: window.clone(),
            fallback: StyleAnimator::new(window.clone()),
            using_gsap: Cell::new(None),
        }
    }

    fn note_engine(&self, gsap: bool) {
        if self.using_gsap.replace(Some(gsap)) == Some(gsap) {
            return;
        }
        if gsap {
            log::info!("[animate] using gsap");
        } else {
            log::info!("[animate] gsap not found; falling back to inline styles");
        }
    }
}

impl Animator for PageAnimator {
    fn to(&self, target: &web::HtmlElement, tween: Tween<'_>, on_complete: Option<OnComplete>) {
        match GsapAnimator::detect(&self.window) {
            Some(gsap) => {
                self.note_engine(true);
                gsap.to(target, tween, on_complete);
            }
            None => {
                self.note_engine(false);
                self.fallback.to(target, tween, on_complete);
            }
        }
    }
}

pub fn for_page(window: &web::Window) -> Rc<dyn Animator> {
    Rc::new(PageAnimator::new(window))
}
