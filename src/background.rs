//! Particle background: canvas setup, reduced-motion gate and the browser
//! events that feed the field (resize, pointer, visibility).

use crate::constants::{PARTICLE_CANVAS_ID, STATIC_BACKGROUND};
use crate::core::{ParticleField, TimeStep};
use crate::dom;
use crate::frame::{FrameContext, ParticleLoop};
use crate::render::Painter;
use anyhow::{anyhow, Context};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mount the field on `#particleCanvas`. `Ok(None)` when the user prefers
/// reduced motion; the canvas then gets a static gradient instead.
pub fn mount(window: &web::Window, time_step: TimeStep) -> anyhow::Result<Option<ParticleLoop>> {
    let document = dom::document(window)?;
    let canvas: web::HtmlCanvasElement = dom::by_id(&document, PARTICLE_CANVAS_ID)?;

    if dom::prefers_reduced_motion(window) {
        log::info!("[particles] reduced motion requested; using static background");
        dom::set_style(&canvas, "background", STATIC_BACKGROUND);
        return Ok(None);
    }

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected context type"))
        .context("particle canvas")?;

    let (w, h) = dom::viewport(window);
    dom::sync_canvas_to_viewport(&canvas, w, h);
    let field = Rc::new(RefCell::new(ParticleField::for_viewport(
        w as f32,
        h as f32,
        time_step,
        StdRng::from_entropy(),
    )));
    log::info!(
        "[particles] field of {} particles on {}x{}",
        field.borrow().particles().len(),
        w,
        h
    );

    wire_resize(window, &canvas, &field);
    wire_pointer(&document, &field);

    let particle_loop = ParticleLoop::new(FrameContext {
        field,
        painter: Painter::new(canvas, ctx),
        last_instant: Instant::now(),
    });
    wire_visibility(&document, &particle_loop);
    if !document.hidden() {
        particle_loop.start();
    }
    Ok(Some(particle_loop))
}

fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) {
    let canvas = canvas.clone();
    let field = field.clone();
    let win = window.clone();
    dom::add_listener(window, "resize", move |_| {
        let (w, h) = dom::viewport(&win);
        dom::sync_canvas_to_viewport(&canvas, w, h);
        field.borrow_mut().regenerate(w as f32, h as f32);
    });
}

// Pointer moves only record coordinates; the field decides per profile whether
// to use them.
fn wire_pointer(document: &web::Document, field: &Rc<RefCell<ParticleField>>) {
    let field_move = field.clone();
    dom::add_listener(document, "mousemove", move |ev| {
        if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
            field_move
                .borrow_mut()
                .pointer_moved(m.client_x() as f32, m.client_y() as f32);
        }
    });
    let field_leave = field.clone();
    dom::add_listener(document, "mouseleave", move |_| {
        field_leave.borrow_mut().pointer_left();
    });
}

fn wire_visibility(document: &web::Document, particle_loop: &ParticleLoop) {
    let doc = document.clone();
    let lp = particle_loop.clone();
    dom::add_listener(document, "visibilitychange", move |_| {
        if doc.hidden() {
            lp.stop();
        } else {
            lp.start();
        }
    });
}
