// Host-side tests for the debounce primitive, driven by a manual clock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod debounce {
        include!("../src/core/debounce.rs");
    }
}

use crate::core::debounce::{Debouncer, Timers};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Pending {
    id: u32,
    due: u64,
    f: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualTimers {
    now: Cell<u64>,
    next_id: Cell<u32>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualTimers {
    fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let due = {
                let mut q = self.queue.borrow_mut();
                q.sort_by_key(|p| p.due);
                match q.first() {
                    Some(p) if p.due <= target => Some(q.remove(0)),
                    _ => None,
                }
            };
            match due {
                Some(p) => {
                    self.now.set(p.due);
                    (p.f)();
                }
                None => break,
            }
        }
        self.now.set(target);
    }

    fn armed(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Timers for ManualTimers {
    type Handle = u32;

    fn set(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Option<u32> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push(Pending {
            id,
            due: self.now.get() + delay_ms as u64,
            f,
        });
        Some(id)
    }

    fn clear(&self, handle: u32) {
        self.queue.borrow_mut().retain(|p| p.id != handle);
    }
}

fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    (hits, move || -> Box<dyn FnOnce()> {
        let h = h.clone();
        Box::new(move || h.set(h.get() + 1))
    })
}

#[test]
fn fires_once_after_settle_window() {
    let timers = Rc::new(ManualTimers::default());
    let debouncer = Debouncer::new(timers.clone(), 250);
    let (hits, bump) = counter();

    debouncer.call(bump());
    assert!(debouncer.is_pending());
    timers.advance(249);
    assert_eq!(hits.get(), 0);
    timers.advance(1);
    assert_eq!(hits.get(), 1);
    assert!(!debouncer.is_pending());

    timers.advance(1000);
    assert_eq!(hits.get(), 1);
}

#[test]
fn burst_collapses_to_last_call() {
    let timers = Rc::new(ManualTimers::default());
    let debouncer = Debouncer::new(timers.clone(), 10);
    let last = Rc::new(Cell::new(0));

    for i in 1..=5 {
        let last = last.clone();
        debouncer.call(move || last.set(i));
        timers.advance(5);
    }
    assert_eq!(last.get(), 0);
    assert_eq!(timers.armed(), 1);

    timers.advance(5);
    assert_eq!(last.get(), 5);
    assert_eq!(timers.armed(), 0);
}

#[test]
fn cancel_drops_pending_call() {
    let timers = Rc::new(ManualTimers::default());
    let debouncer = Debouncer::new(timers.clone(), 10);
    let (hits, bump) = counter();

    debouncer.call(bump());
    debouncer.cancel();
    assert!(!debouncer.is_pending());
    timers.advance(100);
    assert_eq!(hits.get(), 0);

    // Cancelling with nothing pending is harmless
    debouncer.cancel();
}

#[test]
fn clones_share_the_pending_slot() {
    let timers = Rc::new(ManualTimers::default());
    let a = Debouncer::new(timers.clone(), 10);
    let b = a.clone();
    let (hits, bump) = counter();

    a.call(bump());
    b.call(bump());
    assert!(a.is_pending());
    timers.advance(10);
    assert_eq!(hits.get(), 1);
    assert_eq!(b.settle_ms(), 10);
}

#[test]
fn separate_debouncers_are_independent() {
    let timers = Rc::new(ManualTimers::default());
    let scroll = Debouncer::new(timers.clone(), 10);
    let resize = Debouncer::new(timers.clone(), 250);
    let (hits, bump) = counter();

    scroll.call(bump());
    resize.call(bump());
    timers.advance(10);
    assert_eq!(hits.get(), 1);
    assert!(resize.is_pending());
    timers.advance(240);
    assert_eq!(hits.get(), 2);
}

#[test]
fn superseded_callbacks_release_their_captures() {
    let timers = Rc::new(ManualTimers::default());
    let debouncer = Debouncer::new(timers.clone(), 10);
    let shared = Rc::new(());

    for _ in 0..50 {
        let held = shared.clone();
        debouncer.call(move || drop(held));
    }
    // Only the latest call still holds a clone
    assert_eq!(Rc::strong_count(&shared), 2);
    assert_eq!(timers.armed(), 1);

    timers.advance(10);
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn cancel_releases_captures() {
    let timers = Rc::new(ManualTimers::default());
    let debouncer = Debouncer::new(timers.clone(), 250);
    let shared = Rc::new(());

    let held = shared.clone();
    debouncer.call(move || drop(held));
    assert_eq!(Rc::strong_count(&shared), 2);
    debouncer.cancel();
    assert_eq!(Rc::strong_count(&shared), 1);
    assert_eq!(timers.armed(), 0);
}
