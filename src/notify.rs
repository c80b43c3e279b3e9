//! Toast notifications and the contact form that triggers them.

use crate::animate::{Animator, Tween};
use crate::constants::*;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Info,
    Success,
}

impl Kind {
    fn as_str(self) -> &'static str {
        match self {
            Kind::Info => "info",
            Kind::Success => "success",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Kind::Info => NOTIFY_INFO_BG,
            Kind::Success => NOTIFY_SUCCESS_BG,
        }
    }
}

/// Slide a toast in from the right, hold it, slide it out and remove it.
pub fn show(window: &web::Window, animator: &Rc<dyn Animator>, message: &str, kind: Kind) {
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document
        .create_element("div")
        .map_err(|e| log::warn!("[notify] create failed: {:?}", e))
        .and_then(|el| el.dyn_into::<web::HtmlElement>().map_err(|_| ()))
    else {
        return;
    };
    toast.set_class_name(&format!("notification notification-{}", kind.as_str()));
    toast.set_text_content(Some(message));
    for (k, v) in [
        ("position", "fixed"),
        ("top", "20px"),
        ("right", "20px"),
        ("padding", "1rem 2rem"),
        ("background", kind.background()),
        ("color", "white"),
        ("border-radius", "0.5rem"),
        ("z-index", "10000"),
        ("transform", "translateX(100%)"),
        ("opacity", "0"),
    ] {
        dom::set_style(&toast, k, v);
    }
    if body.append_child(&toast).is_err() {
        return;
    }

    let win = window.clone();
    let anim = animator.clone();
    let toast_out = toast.clone();
    animator.to(
        &toast,
        Tween {
            duration: NOTIFY_IN_DURATION,
            ease: NAV_MORPH_EASE,
            props: &[
                ("transform", "translateX(0%)".to_string()),
                ("opacity", "1".to_string()),
            ],
        },
        Some(Box::new(move || {
            let hide = Closure::once_into_js(move || {
                let toast_rm = toast_out.clone();
                anim.to(
                    &toast_out,
                    Tween {
                        duration: NOTIFY_OUT_DURATION,
                        ease: "power2.in",
                        props: &[
                            ("transform", "translateX(100%)".to_string()),
                            ("opacity", "0".to_string()),
                        ],
                    },
                    Some(Box::new(move || toast_rm.remove())),
                );
            });
            _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.unchecked_ref(),
                NOTIFY_HOLD_MS as i32,
            );
        })),
    );
}

/// Intercept the contact form: confirm with a toast and clear the fields.
pub fn wire_contact_form(window: &web::Window, animator: Rc<dyn Animator>) {
    let Some(document) = window.document() else {
        return;
    };
    let form: web::HtmlFormElement = match dom::by_id(&document, CONTACT_FORM_ID) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("[form] contact form unavailable: {e}");
            return;
        }
    };
    let win = window.clone();
    let form_cb = form.clone();
    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        log::info!("[form] contact form submitted");
        show(&win, &animator, FORM_SENT_MESSAGE, Kind::Success);
        form_cb.reset();
    });
}
