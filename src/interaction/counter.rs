//! Frame-synchronised count-up from zero to a target.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Source of display refresh callbacks. The callback receives the frame
/// timestamp in milliseconds; dropping the handle cancels the frame if it has
/// not run yet.
pub trait FrameScheduler {
    type Handle: 'static;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub value: u32,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: u32,
    started_at: Option<f64>,
    value: u32,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
            value: 0,
        }
    }

    /// Advances to `timestamp`. The first call fixes the start time.
    pub fn tick(&mut self, timestamp: f64) -> Frame {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let elapsed = (timestamp - started_at).max(0.0);
        let progress = if self.duration_ms == 0 {
            1.0
        } else {
            (elapsed / f64::from(self.duration_ms)).min(1.0)
        };

        let value = (progress * f64::from(self.target)).floor() as u32;
        self.value = self.value.max(value).min(self.target);

        Frame {
            value: self.value,
            finished: progress >= 1.0,
        }
    }

    pub fn run<S>(self, scheduler: Rc<S>, on_value: impl Fn(u32) + 'static) -> CountUpRun<S::Handle>
    where
        S: FrameScheduler + 'static,
    {
        let run = CountUpRun {
            pending: Rc::new(RefCell::new(None)),
            alive: Rc::new(Cell::new(true)),
        };
        schedule(
            scheduler,
            Rc::new(RefCell::new(self)),
            Rc::new(on_value),
            run.pending.clone(),
            run.alive.clone(),
        );
        run
    }
}

/// Starts a count-up only when `start_when` holds. Nothing is scheduled
/// otherwise, so the displayed value stays at zero.
pub fn start_counter<S>(
    scheduler: Rc<S>,
    target: u32,
    duration_ms: u32,
    start_when: bool,
    on_value: impl Fn(u32) + 'static,
) -> Option<CountUpRun<S::Handle>>
where
    S: FrameScheduler + 'static,
{
    start_when.then(|| CountUp::new(target, duration_ms).run(scheduler, on_value))
}

fn schedule<S>(
    scheduler: Rc<S>,
    animation: Rc<RefCell<CountUp>>,
    on_value: Rc<dyn Fn(u32)>,
    pending: Rc<RefCell<Option<S::Handle>>>,
    alive: Rc<Cell<bool>>,
) where
    S: FrameScheduler + 'static,
{
    let next = {
        let scheduler = scheduler.clone();
        let pending = pending.clone();
        Box::new(move |timestamp: f64| {
            if !alive.get() {
                return;
            }
            let frame = animation.borrow_mut().tick(timestamp);
            on_value(frame.value);
            if frame.finished {
                log::debug!("Count-up reached {}", frame.value);
                let done = pending.borrow_mut().take();
                drop(done);
            } else {
                schedule(scheduler, animation, on_value, pending, alive);
            }
        })
    };
    let handle = scheduler.request_frame(next);
    *pending.borrow_mut() = Some(handle);
}

/// A running count-up. Dropping it cancels the pending frame.
pub struct CountUpRun<H> {
    pending: Rc<RefCell<Option<H>>>,
    alive: Rc<Cell<bool>>,
}

#[cfg(test)]
impl<H> CountUpRun<H> {
    fn is_running(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<H> Drop for CountUpRun<H> {
    fn drop(&mut self) {
        self.alive.set(false);
        let pending = self.pending.borrow_mut().take();
        drop(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    struct QueuedFrame {
        cancelled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce(f64)>,
    }

    struct FakeFrameHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeFrameHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    /// Display that refreshes every `FRAME_MS` of manually advanced time.
    #[derive(Default)]
    struct FakeDisplay {
        now: Cell<f64>,
        queue: RefCell<Vec<QueuedFrame>>,
        frames_run: Cell<usize>,
    }

    impl FakeDisplay {
        fn refresh(&self) {
            self.now.set(self.now.get() + FRAME_MS);
            let due = std::mem::take(&mut *self.queue.borrow_mut());
            for frame in due {
                if !frame.cancelled.get() {
                    self.frames_run.set(self.frames_run.get() + 1);
                    (frame.callback)(self.now.get());
                }
            }
        }

        fn run_for(&self, ms: f64) {
            let end = self.now.get() + ms;
            while self.now.get() < end {
                self.refresh();
            }
        }

        fn pending(&self) -> usize {
            self.queue.borrow().iter().filter(|f| !f.cancelled.get()).count()
        }
    }

    impl FrameScheduler for FakeDisplay {
        type Handle = FakeFrameHandle;

        fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> FakeFrameHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(QueuedFrame {
                cancelled: cancelled.clone(),
                callback,
            });
            FakeFrameHandle { cancelled }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<(f64, u32)>>>, Rc<FakeDisplay>, impl Fn(u32) + 'static) {
        let display = Rc::new(FakeDisplay::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_value = {
            let seen = seen.clone();
            let display = display.clone();
            move |value: u32| seen.borrow_mut().push((display.now.get(), value))
        };
        (seen, display, on_value)
    }

    #[test]
    fn tick_follows_linear_progress() {
        let mut count = CountUp::new(150, 2000);
        assert_eq!(count.tick(1000.0), Frame { value: 0, finished: false });
        assert_eq!(count.tick(2000.0).value, 75);
        assert_eq!(count.tick(2999.0).value, 149);
        assert_eq!(count.tick(3000.0), Frame { value: 150, finished: true });
        assert_eq!(count.tick(9000.0), Frame { value: 150, finished: true });
    }

    #[test]
    fn tick_never_goes_backwards() {
        let mut count = CountUp::new(100, 1000);
        count.tick(0.0);
        assert_eq!(count.tick(500.0).value, 50);
        assert_eq!(count.tick(200.0).value, 50);
        assert_eq!(count.tick(-50.0).value, 50);
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut count = CountUp::new(42, 0);
        assert_eq!(count.tick(123.0), Frame { value: 42, finished: true });
    }

    #[test]
    fn zero_target_finishes_at_zero() {
        let (seen, display, on_value) = recorder();
        let run = CountUp::new(0, 500).run(display.clone(), on_value);
        display.run_for(1000.0);

        assert!(!run.is_running());
        assert_eq!(seen.borrow().last().map(|&(_, v)| v), Some(0));
    }

    #[test]
    fn runs_to_target_in_about_the_duration() {
        let (seen, display, on_value) = recorder();
        let run = CountUp::new(150, 2000).run(display.clone(), on_value);
        display.run_for(3000.0);

        let seen = seen.borrow();
        let values: Vec<u32> = seen.iter().map(|&(_, v)| v).collect();
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&150));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));

        let first_frame = seen[0].0;
        let last_frame = seen[seen.len() - 1].0;
        let took = last_frame - first_frame;
        assert!(took >= 2000.0 && took <= 2000.0 + FRAME_MS, "took {took}ms");

        assert!(!run.is_running());
        assert_eq!(display.pending(), 0);
    }

    #[test]
    fn closed_gate_keeps_zero() {
        let (seen, display, on_value) = recorder();
        let run = start_counter(display.clone(), 150, 2000, false, on_value);
        display.run_for(5000.0);

        assert!(run.is_none());
        assert!(seen.borrow().is_empty());
        assert_eq!(display.frames_run.get(), 0);
    }

    #[test]
    fn open_gate_starts_animation() {
        let (seen, display, on_value) = recorder();
        let run = start_counter(display.clone(), 50, 2000, true, on_value);
        assert!(run.as_ref().is_some_and(|r| r.is_running()));

        display.run_for(2500.0);
        assert_eq!(seen.borrow().last().map(|&(_, v)| v), Some(50));
    }

    #[test]
    fn dropping_run_stops_updates() {
        let (seen, display, on_value) = recorder();
        let run = CountUp::new(500, 2000).run(display.clone(), on_value);
        display.run_for(500.0);
        let before = seen.borrow().len();
        assert!(before > 0);

        drop(run);
        assert_eq!(display.pending(), 0);
        display.run_for(3000.0);
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn restart_begins_again_from_zero() {
        let (seen, display, on_value) = recorder();
        let first = CountUp::new(100, 1000).run(display.clone(), on_value);
        display.run_for(600.0);
        drop(first);

        let restarted = Rc::new(RefCell::new(Vec::new()));
        let sink = restarted.clone();
        let _second = CountUp::new(300, 1000).run(display.clone(), move |v| sink.borrow_mut().push(v));
        display.run_for(1200.0);

        let restarted = restarted.borrow();
        assert_eq!(restarted.first(), Some(&0));
        assert_eq!(restarted.last(), Some(&300));
        assert!(seen.borrow().iter().all(|&(_, v)| v <= 100));
    }
}
