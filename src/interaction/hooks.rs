use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use super::counter::start_counter;
use super::dom::{DomFrameScheduler, DomIntersectionSource, ScrollListener};
use super::navbar::is_scrolled;
use super::reveal::VisibilityDetector;

/// Returns a ref to put on the observed element and whether it has been seen.
/// The flag flips to `true` once and stays there.
#[hook]
pub fn use_scroll_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |threshold| {
                let detector = node.cast::<Element>().map(|element| {
                    VisibilityDetector::attach(&DomIntersectionSource, &element, *threshold, move || {
                        visible.set(true);
                    })
                });
                move || drop(detector)
            },
            threshold,
        );
    }

    (node, *visible)
}

/// Counts from 0 to `target` over `duration_ms` once `start_when` is true.
/// Any change of the inputs restarts from 0.
#[hook]
pub fn use_counter(target: u32, duration_ms: u32, start_when: bool) -> u32 {
    let count = use_state_eq(|| 0u32);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |&(target, duration_ms, start_when)| {
                count.set(0);
                let run = DomFrameScheduler::new().and_then(|scheduler| {
                    start_counter(Rc::new(scheduler), target, duration_ms, start_when, move |value| {
                        count.set(value)
                    })
                });
                move || drop(run)
            },
            (target, duration_ms, start_when),
        );
    }

    *count
}

/// Whether the page is scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = web_sys::window().and_then(|window| {
                    let update = {
                        let window = window.clone();
                        move || {
                            let offset = window.scroll_y().unwrap_or(0.0);
                            scrolled.set(is_scrolled(offset, threshold));
                        }
                    };
                    // Page may be restored mid-scroll.
                    update();
                    ScrollListener::attach(&window, update)
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}
