//! One-way "has this region been seen" detection.
//!
//! The detector itself knows nothing about the DOM: it is handed an
//! [`IntersectionSource`] that reports intersection records for a target and
//! returns a subscription that stops observing when dropped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Browsers report ratios like 0.2999 for a region exactly 30% in view.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn reaches(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

pub trait IntersectionSource {
    type Target: ?Sized;
    /// Dropping the subscription stops observation.
    type Subscription: 'static;

    /// Returns `None` when the host cannot observe intersections at all.
    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_change: Box<dyn Fn(Intersection)>,
    ) -> Option<Self::Subscription>;
}

struct Inner<Sub> {
    state: Cell<RevealState>,
    threshold: f64,
    subscription: RefCell<Option<Sub>>,
    on_reveal: Rc<dyn Fn()>,
}

impl<Sub> Inner<Sub> {
    fn record(&self, entry: Intersection) {
        if self.state.get().is_revealed() || !entry.reaches(self.threshold) {
            return;
        }
        self.reveal();
    }

    fn reveal(&self) {
        self.state.set(RevealState::Revealed);
        let finished = self.subscription.borrow_mut().take();
        drop(finished);
        (self.on_reveal)();
    }
}

/// Owns one observation. Dropping it before the region is seen cancels the
/// observation and no callback reaches `on_reveal` afterwards.
pub struct VisibilityDetector<Sub> {
    inner: Rc<Inner<Sub>>,
}

impl<Sub: 'static> VisibilityDetector<Sub> {
    pub fn attach<S>(
        source: &S,
        target: &S::Target,
        threshold: f64,
        on_reveal: impl Fn() + 'static,
    ) -> Self
    where
        S: IntersectionSource<Subscription = Sub>,
    {
        let inner = Rc::new(Inner {
            state: Cell::new(RevealState::Hidden),
            threshold,
            subscription: RefCell::new(None),
            on_reveal: Rc::new(on_reveal),
        });

        let weak: Weak<Inner<Sub>> = Rc::downgrade(&inner);
        let on_change = Box::new(move |entry: Intersection| {
            if let Some(inner) = weak.upgrade() {
                inner.record(entry);
            }
        });

        match source.observe(target, threshold, on_change) {
            // A record delivered while attaching already revealed us.
            Some(_subscription) if inner.state.get().is_revealed() => {}
            Some(subscription) => {
                *inner.subscription.borrow_mut() = Some(subscription);
            }
            None => {
                log::warn!("Intersection observation unsupported, revealing immediately");
                inner.reveal();
            }
        }

        Self { inner }
    }
}

#[cfg(test)]
impl<Sub> VisibilityDetector<Sub> {
    fn state(&self) -> RevealState {
        self.inner.state.get()
    }

    fn is_observing(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Registration {
        callback: Rc<dyn Fn(Intersection)>,
        live: Rc<Cell<bool>>,
    }

    struct FakeSubscription {
        live: Rc<Cell<bool>>,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    #[derive(Default)]
    struct FakeViewport {
        unsupported: bool,
        initial_record: Option<Intersection>,
        registrations: RefCell<Vec<Registration>>,
    }

    impl FakeViewport {
        fn callbacks(&self, include_cancelled: bool) -> Vec<Rc<dyn Fn(Intersection)>> {
            self.registrations
                .borrow()
                .iter()
                .filter(|r| include_cancelled || r.live.get())
                .map(|r| r.callback.clone())
                .collect()
        }

        fn scroll_to(&self, ratio: f64) {
            for callback in self.callbacks(false) {
                callback(visible(ratio));
            }
        }

        /// Delivers a record even to cancelled observers, like a platform
        /// callback already queued when teardown happened.
        fn deliver_late(&self, ratio: f64) {
            for callback in self.callbacks(true) {
                callback(visible(ratio));
            }
        }

        fn live_observers(&self) -> usize {
            self.registrations.borrow().iter().filter(|r| r.live.get()).count()
        }
    }

    impl IntersectionSource for FakeViewport {
        type Target = ();
        type Subscription = FakeSubscription;

        fn observe(
            &self,
            _target: &(),
            _threshold: f64,
            on_change: Box<dyn Fn(Intersection)>,
        ) -> Option<FakeSubscription> {
            if self.unsupported {
                return None;
            }
            let callback: Rc<dyn Fn(Intersection)> = Rc::from(on_change);
            let live = Rc::new(Cell::new(true));
            self.registrations.borrow_mut().push(Registration {
                callback: callback.clone(),
                live: live.clone(),
            });
            if let Some(record) = self.initial_record {
                callback(record);
            }
            Some(FakeSubscription { live })
        }
    }

    fn visible(ratio: f64) -> Intersection {
        Intersection {
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let fired = Rc::new(Cell::new(0));
        let handle = fired.clone();
        (fired, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let viewport = FakeViewport::default();
        let (fired, on_reveal) = counter();
        let detector = VisibilityDetector::attach(&viewport, &(), 0.3, on_reveal);

        viewport.scroll_to(0.1);
        viewport.scroll_to(0.25);

        assert_eq!(detector.state(), RevealState::Hidden);
        assert_eq!(fired.get(), 0);
        assert!(detector.is_observing());
    }

    #[test]
    fn reveals_once_and_stops_observing() {
        let viewport = FakeViewport::default();
        let (fired, on_reveal) = counter();
        let detector = VisibilityDetector::attach(&viewport, &(), 0.3, on_reveal);

        viewport.scroll_to(0.3);
        assert_eq!(detector.state(), RevealState::Revealed);
        assert!(!detector.is_observing());
        assert_eq!(viewport.live_observers(), 0);

        viewport.deliver_late(0.0);
        viewport.deliver_late(1.0);
        assert_eq!(detector.state(), RevealState::Revealed);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn rounding_just_under_threshold_counts() {
        let viewport = FakeViewport::default();
        let (fired, on_reveal) = counter();
        let detector = VisibilityDetector::attach(&viewport, &(), 0.3, on_reveal);

        viewport.scroll_to(0.2999);
        assert!(detector.state().is_revealed());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn not_intersecting_never_reveals() {
        let viewport = FakeViewport::default();
        let (fired, on_reveal) = counter();
        let detector = VisibilityDetector::attach(&viewport, &(), 0.0, on_reveal);

        for callback in viewport.callbacks(false) {
            callback(Intersection { ratio: 0.0, is_intersecting: false });
        }
        assert_eq!(detector.state(), RevealState::Hidden);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn already_visible_region_fires_on_attach() {
        let viewport = FakeViewport {
            initial_record: Some(visible(1.0)),
            ..Default::default()
        };
        let (fired, on_reveal) = counter();
        let detector = VisibilityDetector::attach(&viewport, &(), 0.1, on_reveal);

        assert!(detector.state().is_revealed());
        assert_eq!(fired.get(), 1);
        assert_eq!(viewport.live_observers(), 0);
    }

    #[test]
    fn missing_observer_support_reveals_immediately() {
        let viewport = FakeViewport {
            unsupported: true,
            ..Default::default()
        };
        let (fired, on_reveal) = counter();
        let detector = VisibilityDetector::attach(&viewport, &(), 0.5, on_reveal);

        assert!(detector.state().is_revealed());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn detaching_before_visible_silences_callbacks() {
        let viewport = FakeViewport::default();
        let (fired, on_reveal) = counter();
        let detector = VisibilityDetector::attach(&viewport, &(), 0.1, on_reveal);
        assert_eq!(viewport.live_observers(), 1);

        drop(detector);
        assert_eq!(viewport.live_observers(), 0);

        viewport.deliver_late(1.0);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn detectors_are_independent() {
        let viewport = FakeViewport::default();
        let (low_fired, low) = counter();
        let (high_fired, high) = counter();
        let low = VisibilityDetector::attach(&viewport, &(), 0.1, low);
        let high = VisibilityDetector::attach(&viewport, &(), 0.5, high);

        viewport.scroll_to(0.2);
        assert!(low.state().is_revealed());
        assert!(!high.state().is_revealed());

        viewport.scroll_to(0.6);
        assert!(high.state().is_revealed());
        assert_eq!((low_fired.get(), high_fired.get()), (1, 1));
    }
}
