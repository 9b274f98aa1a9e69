//! Cancellable delayed tasks for search-as-you-type.
//!
//! The scheduler is injected so the debounce rule (each keystroke reschedules,
//! only the last burst member fires) can be tested without real timers.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;


pub trait DelayScheduler: Clone + 'static {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Production scheduler: a spawned timeout on the UI event loop.
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl DelayScheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}

/// Generation-counted debouncer. `schedule` arms the task after the quiet
/// period; any later `schedule` or `cancel` makes an armed task a no-op.
pub struct Debouncer<S: DelayScheduler> {
    scheduler: S,
    delay_ms: u32,
    generation: Rc<Cell<u64>>,
}

impl<S: DelayScheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms, generation: Rc::new(Cell::new(0)) }
    }

    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        let generation = Rc::clone(&self.generation);
        self.scheduler.after(
            self.delay_ms,
            Box::new(move || {
                if generation.get() == ticket {
                    task();
                }
            }),
        );
    }

    /// Drop the pending task, if any.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Collects scheduled tasks; `fire_all` plays the elapsed quiet period.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        pending: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    }

    impl ManualScheduler {
        fn fire_all(&self) {
            let tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for task in tasks {
                task();
            }
        }
    }

    impl DelayScheduler for ManualScheduler {
        fn after(&self, _delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push(task);
        }
    }

    #[test]
    fn a_typing_burst_fires_exactly_one_task_with_the_last_input() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 300);
        let fired: Rc<RefCell<Vec<String>>> = Rc::default();

        for text in ["a", "ab"] {
            let fired = Rc::clone(&fired);
            let text = text.to_string();
            debouncer.schedule(move || fired.borrow_mut().push(text));
        }
        scheduler.fire_all();

        assert_eq!(*fired.borrow(), vec!["ab".to_string()]);
    }

    #[test]
    fn separate_bursts_each_fire() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 300);
        let fired: Rc<RefCell<Vec<&'static str>>> = Rc::default();

        let f = Rc::clone(&fired);
        debouncer.schedule(move || f.borrow_mut().push("first"));
        scheduler.fire_all();
        let f = Rc::clone(&fired);
        debouncer.schedule(move || f.borrow_mut().push("second"));
        scheduler.fire_all();

        assert_eq!(*fired.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn cancel_suppresses_the_pending_task() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 300);
        let fired = Rc::new(Cell::new(false));

        let f = Rc::clone(&fired);
        debouncer.schedule(move || f.set(true));
        debouncer.cancel();
        scheduler.fire_all();

        assert!(!fired.get());
    }
}
