#![cfg(target_arch = "wasm32")]
use crate::core::{NavMode, TimeStep};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod animate;
mod background;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod fab;
mod frame;
mod lazy;
mod nav;
mod notify;
mod observer;
mod progress;
mod render;

use animate::Animator;
use frame::ParticleLoop;
use lazy::LazyImages;
use nav::Navigation;
use observer::SectionObserver;

/// Handle to the mounted page components, returned by [`mount`].
///
/// Every component is optional: a page missing the navigation or the particle
/// canvas still gets the rest.
#[wasm_bindgen]
pub struct Portfolio {
    window: web::Window,
    animator: Rc<dyn Animator>,
    nav: Option<Navigation>,
    particles: Option<ParticleLoop>,
    _observer: Option<SectionObserver>,
    _lazy_images: Option<LazyImages>,
}

#[wasm_bindgen]
impl Portfolio {
    /// Id of the active section (`home` when navigation is not mounted).
    #[wasm_bindgen(js_name = currentSection)]
    pub fn current_section(&self) -> String {
        self.nav
            .as_ref()
            .map(|n| n.current_section())
            .unwrap_or_default()
            .id()
            .to_string()
    }

    /// Navigation mode: `mobile`, `normal`, `compact` or `sidebar`.
    pub fn mode(&self) -> String {
        self.nav_mode().as_str().to_string()
    }

    #[wasm_bindgen(js_name = isCompact)]
    pub fn is_compact(&self) -> bool {
        self.nav_mode() == NavMode::Compact
    }

    #[wasm_bindgen(js_name = isSidebar)]
    pub fn is_sidebar(&self) -> bool {
        self.nav_mode() == NavMode::Sidebar
    }

    #[wasm_bindgen(js_name = isMobile)]
    pub fn is_mobile(&self) -> bool {
        self.nav_mode() == NavMode::Mobile
    }

    /// Activate and scroll to a section. Returns false when it is not on the page.
    #[wasm_bindgen(js_name = goToSection)]
    pub fn go_to_section(&self, id: &str) -> bool {
        self.nav
            .as_ref()
            .map(|n| n.go_to_section(id))
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = startParticles)]
    pub fn start_particles(&self) {
        if let Some(p) = &self.particles {
            p.start();
        }
    }

    #[wasm_bindgen(js_name = stopParticles)]
    pub fn stop_particles(&self) {
        if let Some(p) = &self.particles {
            p.stop();
        }
    }

    #[wasm_bindgen(js_name = particlesRunning)]
    pub fn particles_running(&self) -> bool {
        self.particles
            .as_ref()
            .map(|p| p.is_running())
            .unwrap_or(false)
    }

    /// Show an informational toast.
    pub fn notify(&self, message: &str) {
        notify::show(&self.window, &self.animator, message, notify::Kind::Info);
    }
}

impl Portfolio {
    fn nav_mode(&self) -> NavMode {
        self.nav.as_ref().map(|n| n.mode()).unwrap_or_default()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    Ok(())
}

/// Mount navigation, shortcuts, observers, scroll progress, lazy images, the
/// particle background and the contact form.
///
/// `normalizedTimestep` scales particle motion by measured frame time instead
/// of advancing one unit per frame.
#[wasm_bindgen]
pub fn mount(normalized_timestep: Option<bool>) -> Result<Portfolio, JsValue> {
    let window = dom::window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let animator = animate::for_page(&window);
    let timers = Rc::new(dom::BrowserTimers::new(window.clone()));

    let nav = match Navigation::mount(&window, animator.clone()) {
        Ok(n) => Some(n),
        Err(e) => {
            log::warn!("[nav] navigation disabled: {e}");
            None
        }
    };

    let mut observer = None;
    if let Some(nav) = &nav {
        events::wire_scroll(nav, &timers);
        events::wire_resize(nav, &timers);
        events::wire_keyboard(nav);
        events::wire_nav_links(nav);
        events::wire_cta_buttons(nav);
        events::wire_anchor_links(nav);
        events::wire_swipe(nav);
        if let Err(e) = fab::wire_fab(nav, animator.clone()) {
            log::warn!("[fab] floating action button disabled: {e}");
        }
        observer = match SectionObserver::mount(nav) {
            Ok(o) => Some(o),
            Err(e) => {
                log::warn!("[observer] falling back to scroll marker: {e}");
                None
            }
        };
    }

    let document = dom::document(&window).map_err(|e| JsValue::from_str(&e.to_string()))?;
    match progress::ScrollProgress::mount(&document) {
        Ok(p) => events::wire_progress(&window, p, &timers),
        Err(e) => log::warn!("[progress] scroll progress disabled: {e}"),
    }
    let lazy_images = match LazyImages::mount(&document) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[lazy] images loaded eagerly: {e}");
            None
        }
    };

    let time_step = if normalized_timestep.unwrap_or(false) {
        TimeStep::Normalized
    } else {
        TimeStep::PerFrame
    };
    let particles = match background::mount(&window, time_step) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[particles] background disabled: {e:#}");
            None
        }
    };

    notify::wire_contact_form(&window, animator.clone());

    Ok(Portfolio {
        window,
        animator,
        nav,
        particles,
        _observer: observer,
        _lazy_images: lazy_images,
    })
}
