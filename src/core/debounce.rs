// Shared debounce primitive.
//
// A `Debouncer` delays a call until `settle_ms` pass with no further calls.
// Timer access goes through the `Timers` trait so the browser `setTimeout`
// backend and a manual clock in tests share the same logic.

use std::cell::Cell;
use std::rc::Rc;

pub trait Timers {
    type Handle: Copy + 'static;

    /// Run `f` once after `delay_ms`. `None` if the timer could not be armed.
    fn set(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn clear(&self, handle: Self::Handle);
}

pub struct Debouncer<T: Timers> {
    timers: Rc<T>,
    settle_ms: u32,
    pending: Rc<Cell<Option<T::Handle>>>,
}

impl<T: Timers> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            timers: self.timers.clone(),
            settle_ms: self.settle_ms,
            pending: self.pending.clone(),
        }
    }
}

impl<T: Timers> Debouncer<T> {
    pub fn new(timers: Rc<T>, settle_ms: u32) -> Self {
        Self {
            timers,
            settle_ms,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Cancel any pending call and schedule `f` after the settle window.
    pub fn call(&self, f: impl FnOnce() + 'static) {
        self.cancel();
        let pending = self.pending.clone();
        let handle = self.timers.set(
            self.settle_ms,
            Box::new(move || {
                pending.set(None);
                f();
            }),
        );
        self.pending.set(handle);
    }

    pub fn cancel(&self) {
        if let Some(h) = self.pending.take() {
            self.timers.clear(h);
        }
    }
}
