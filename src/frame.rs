use crate::core::ParticleField;
use crate::render::Painter;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub painter: Painter,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut field = self.field.borrow_mut();
        let frames = field.config().time_step.frames(dt_sec);
        field.step(frames);
        self.painter.draw(&field);
    }
}

/// requestAnimationFrame loop for the particle field. Stopping cancels the
/// pending frame; starting again picks up from the current batch with no
/// catch-up frames.
#[derive(Clone)]
pub struct ParticleLoop {
    ctx: Rc<RefCell<FrameContext>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl ParticleLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let this = Self {
            ctx: Rc::new(RefCell::new(ctx)),
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        };
        let ctx_tick = this.ctx.clone();
        let raf_id = this.raf_id.clone();
        let tick_clone = this.tick.clone();
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Cleared by stop(); a stopped loop must not reschedule itself.
            if raf_id.get().is_none() {
                return;
            }
            ctx_tick.borrow_mut().frame();
            raf_id.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        this
    }

    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        self.ctx.borrow_mut().last_instant = Instant::now();
        self.raf_id.set(request_frame(&self.tick));
        log::debug!("[particles] loop started");
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::debug!("[particles] loop stopped");
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}
