//! Browser implementations of the observation and frame traits, plus the
//! window scroll listener. Every registration is released on drop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};

use super::counter::FrameScheduler;
use super::reveal::{Intersection, IntersectionSource};

pub struct DomIntersectionSource;

pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl IntersectionSource for DomIntersectionSource {
    type Target = Element;
    type Subscription = IntersectionSubscription;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        on_change: Box<dyn Fn(Intersection)>,
    ) -> Option<IntersectionSubscription> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(Intersection {
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                });
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(target);
                Some(IntersectionSubscription {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {:?}", err);
                None
            }
        }
    }
}

pub struct DomFrameScheduler {
    window: Window,
}

impl DomFrameScheduler {
    pub fn new() -> Option<Self> {
        match web_sys::window() {
            Some(window) => Some(Self { window }),
            None => {
                log::warn!("No window, animations disabled");
                None
            }
        }
    }
}

pub struct FrameHandle {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        // No-op for frames that already ran.
        let _ = self.window.cancel_animation_frame(self.id);
    }
}

impl FrameScheduler for DomFrameScheduler {
    type Handle = Option<FrameHandle>;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Option<FrameHandle> {
        let mut callback = Some(callback);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(callback) = callback.take() {
                callback(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);

        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle {
                window: self.window.clone(),
                id,
                _callback: callback,
            }),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }
}

/// Window `scroll` listener, removed again on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(window: &Window, handler: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                window: window.clone(),
                callback,
            }),
            Err(err) => {
                log::warn!("Failed to listen for scroll events: {:?}", err);
                None
            }
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Smoothly scrolls the element with `id` into view. Returns `false` and does
/// nothing when no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::debug!("No section with id '{}' to scroll to", id);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
