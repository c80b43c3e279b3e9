//! Adaptive navigation controller.
//!
//! Owns typed handles to the navigation DOM, looked up once at mount, and the
//! `NavState` machine. Mode changes swap the container classes and morph it
//! through the tween engine; section changes re-highlight links, move the
//! indicator and retheme the page.

use crate::animate::{Animator, Tween};
use crate::constants::*;
use crate::core::navigation::{active_section_at, next_focus_index, section_marker};
use crate::core::{ModeChange, NavMode, NavState, NavThresholds, Section, SectionExtent};
use crate::dom;
use crate::error::SiteError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Which mechanism derives the active section. Only one runs at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionTracking {
    ScrollMarker,
    Observer,
}

struct NavLink {
    el: web::HtmlElement,
    section: Option<Section>,
    color: Option<String>,
}

struct NavDom {
    nav: web::HtmlElement,
    menu: Option<web::HtmlElement>,
    indicator: Option<web::HtmlElement>,
    progress: Option<web::HtmlElement>,
    root: Option<web::HtmlElement>,
    links: Vec<NavLink>,
    sections: Vec<(Section, web::HtmlElement)>,
}

struct Inner {
    window: web::Window,
    document: web::Document,
    dom: NavDom,
    state: RefCell<NavState>,
    tracking: Cell<SectionTracking>,
    animator: Rc<dyn Animator>,
}

#[derive(Clone)]
pub struct Navigation {
    inner: Rc<Inner>,
}

fn optional<T>(what: &str, r: Result<T, SiteError>) -> Option<T> {
    match r {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[nav] {what} unavailable: {e}");
            None
        }
    }
}

impl Navigation {
    pub fn mount(window: &web::Window, animator: Rc<dyn Animator>) -> Result<Self, SiteError> {
        let document = dom::document(window)?;
        let nav: web::HtmlElement = dom::by_id(&document, NAV_ID)?;
        let menu = optional("menu", dom::by_id(&document, NAV_MENU_ID));
        let indicator = optional("indicator", dom::query(&document, NAV_INDICATOR_SELECTOR));
        let progress = optional("progress bar", dom::by_id(&document, SCROLL_PROGRESS_ID));
        let root = document
            .document_element()
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok());

        let links = dom::query_all::<web::HtmlElement>(&document, NAV_LINK_SELECTOR)
            .into_iter()
            .map(|el| NavLink {
                section: el
                    .get_attribute(DATA_SECTION_ATTR)
                    .and_then(|id| Section::from_id(&id)),
                color: el.get_attribute(DATA_COLOR_ATTR),
                el,
            })
            .collect::<Vec<_>>();
        let sections = dom::query_all::<web::HtmlElement>(&document, SECTION_SELECTOR)
            .into_iter()
            .filter_map(|el| Section::from_id(&el.id()).map(|s| (s, el)))
            .collect::<Vec<_>>();
        log::info!(
            "[nav] mounted with {} links, {} sections",
            links.len(),
            sections.len()
        );

        let navigation = Self {
            inner: Rc::new(Inner {
                window: window.clone(),
                document,
                dom: NavDom {
                    nav,
                    menu,
                    indicator,
                    progress,
                    root,
                    links,
                    sections,
                },
                state: RefCell::new(NavState::new(NavThresholds::default())),
                tracking: Cell::new(SectionTracking::ScrollMarker),
                animator,
            }),
        };
        navigation.update_active_from_scroll();
        navigation.apply_section_visuals(navigation.current_section());
        navigation.evaluate_mode();
        Ok(navigation)
    }

    pub fn window(&self) -> &web::Window {
        &self.inner.window
    }

    pub fn document(&self) -> &web::Document {
        &self.inner.document
    }

    pub fn current_section(&self) -> Section {
        self.inner.state.borrow().current_section()
    }

    pub fn mode(&self) -> NavMode {
        self.inner.state.borrow().mode()
    }

    pub fn tracking(&self) -> SectionTracking {
        self.inner.tracking.get()
    }

    pub fn set_tracking(&self, tracking: SectionTracking) {
        log::info!("[nav] active section tracking: {:?}", tracking);
        self.inner.tracking.set(tracking);
    }

    fn width(&self) -> f64 {
        dom::viewport(&self.inner.window).0
    }

    /// Debounced scroll: re-derive the mode and, when the marker owns section
    /// tracking, the active section.
    pub fn on_scroll(&self) {
        self.evaluate_mode();
        if self.tracking() == SectionTracking::ScrollMarker {
            self.update_active_from_scroll();
        }
    }

    /// Debounced resize.
    pub fn on_resize(&self) {
        self.evaluate_mode();
        self.update_indicator();
    }

    fn evaluate_mode(&self) {
        let scroll_y = dom::scroll_y(&self.inner.window);
        let width = self.width();
        let change = self.inner.state.borrow_mut().evaluate(scroll_y, width);
        if let Some(change) = change {
            self.apply_mode_change(change);
        }
    }

    fn apply_mode_change(&self, change: ModeChange) {
        log::info!(
            "[nav] mode {} -> {}",
            change.from.as_str(),
            change.to.as_str()
        );
        let nav = &self.inner.dom.nav;
        let classes = nav.class_list();
        for c in MODE_CLASSES {
            _ = classes.remove_1(c);
        }
        if let Some(c) = change.to.class_name() {
            _ = classes.add_1(c);
        }
        if change.animates() {
            let this = self.clone();
            self.inner.animator.to(
                nav,
                Tween {
                    duration: NAV_MORPH_DURATION,
                    ease: NAV_MORPH_EASE,
                    props: &[],
                },
                Some(Box::new(move || this.update_indicator())),
            );
        }
    }

    pub fn section_extents(&self) -> Vec<SectionExtent> {
        self.inner
            .dom
            .sections
            .iter()
            .map(|(section, el)| SectionExtent {
                section: *section,
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
            .collect()
    }

    pub fn update_active_from_scroll(&self) {
        let (_, height) = dom::viewport(&self.inner.window);
        let marker = section_marker(dom::scroll_y(&self.inner.window), height);
        let section = active_section_at(&self.section_extents(), marker);
        self.set_active_section(section);
    }

    pub fn set_active_section(&self, section: Section) {
        if !self.inner.state.borrow_mut().set_active(section) {
            return;
        }
        log::debug!("[nav] active section {}", section.id());
        self.apply_section_visuals(section);
    }

    fn apply_section_visuals(&self, section: Section) {
        for link in &self.inner.dom.links {
            let classes = link.el.class_list();
            _ = classes.remove_1(ACTIVE_CLASS);
            if link.section == Some(section) {
                _ = classes.add_1(ACTIVE_CLASS);
                if let Some(color) = &link.color {
                    dom::set_style(&link.el, LINK_ACCENT_VAR, color);
                }
            }
        }
        self.update_indicator();
        self.update_theme(section);
    }

    fn update_indicator(&self) {
        let parts = &self.inner.dom;
        let (Some(menu), Some(indicator)) = (&parts.menu, &parts.indicator) else {
            return;
        };
        {
            let state = self.inner.state.borrow();
            if state.is_sidebar() || state.thresholds().is_mobile_width(self.width()) {
                return;
            }
        }
        let Ok(active) =
            dom::query::<web::HtmlElement>(&self.inner.document, ACTIVE_NAV_LINK_SELECTOR)
        else {
            return;
        };
        let link_rect = active.get_bounding_client_rect();
        let menu_rect = menu.get_bounding_client_rect();
        let left = link_rect.left() - menu_rect.left();
        let props = [
            ("left", format!("{left}px")),
            ("width", format!("{}px", link_rect.width())),
        ];
        self.inner.animator.to(
            indicator,
            Tween {
                duration: INDICATOR_DURATION,
                ease: INDICATOR_EASE,
                props: &props,
            },
            None,
        );
        if let Some(color) = active.get_attribute(DATA_COLOR_ATTR) {
            dom::set_style(indicator, "background", &accent_gradient(&color));
        }
    }

    fn update_theme(&self, section: Section) {
        let color = section.accent_color();
        if let Some(root) = &self.inner.dom.root {
            dom::set_style(root, THEME_PRIMARY_VAR, color);
        }
        if let Some(bar) = &self.inner.dom.progress {
            dom::set_style(bar, "background", &accent_gradient(color));
        }
    }

    /// Activate `id` and scroll to it. Unknown or absent sections are ignored.
    pub fn go_to_section(&self, id: &str) -> bool {
        match Section::from_id(id) {
            Some(section) => self.go_to(section),
            None => {
                log::debug!("[nav] unknown section {id}");
                false
            }
        }
    }

    pub fn go_to(&self, section: Section) -> bool {
        let extents = self.section_extents();
        let width = self.width();
        let jump = self.inner.state.borrow_mut().go_to(section, &extents, width);
        let Some(jump) = jump else {
            log::debug!("[nav] section {} not on page", section.id());
            return false;
        };
        if jump.changed {
            log::debug!("[nav] active section {}", section.id());
            self.apply_section_visuals(section);
        }
        log::debug!("[nav] scrolling to #{} at {}", section.id(), jump.scroll_top);
        dom::scroll_window_to(&self.inner.window, jump.scroll_top);
        true
    }

    /// Scroll so `el` sits just below the navigation bar.
    pub fn scroll_to_element(&self, el: &web::HtmlElement) {
        let width = self.width();
        let top = self
            .inner
            .state
            .borrow()
            .scroll_target(el.offset_top() as f64, width);
        log::debug!("[nav] scrolling to #{} at {top}", el.id());
        dom::scroll_window_to(&self.inner.window, top);
    }

    pub fn go_to_next(&self) -> bool {
        self.go_to(self.current_section().next())
    }

    pub fn go_to_previous(&self) -> bool {
        self.go_to(self.current_section().previous())
    }

    /// Move focus around the nav link ring. False when focus is not on a link.
    pub fn focus_adjacent_link(&self, reverse: bool) -> bool {
        let Some(focused) = self.inner.document.active_element() else {
            return false;
        };
        let links = &self.inner.dom.links;
        let current = links
            .iter()
            .position(|l| AsRef::<web::Element>::as_ref(&l.el) == &focused);
        let Some(next) = current.and_then(|i| next_focus_index(i, links.len(), reverse)) else {
            return false;
        };
        _ = links[next].el.focus();
        true
    }

    /// Nav links paired with the section they point at.
    pub fn link_targets(&self) -> Vec<(web::HtmlElement, Section)> {
        self.inner
            .dom
            .links
            .iter()
            .filter_map(|l| l.section.map(|s| (l.el.clone(), s)))
            .collect()
    }

    pub fn section_elements(&self) -> Vec<web::HtmlElement> {
        self.inner
            .dom
            .sections
            .iter()
            .map(|(_, el)| el.clone())
            .collect()
    }
}

fn accent_gradient(color: &str) -> String {
    format!("linear-gradient(90deg, {color}, {color}aa)")
}
