use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Browsers report ratios like 0.29999 for an exact 30% crossing.
const RATIO_TOLERANCE: f64 = 1e-3;

pub fn meets_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// Remembers whether a region has ever been seen. Only the first positive
/// report counts; later reports, visible or not, change nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    fired: bool,
}

impl VisibilityLatch {
    /// Returns true exactly once, for the first visible report.
    pub fn report(&mut self, visible: bool) -> bool {
        if self.fired || !visible {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Wraps a report callback so it goes quiet once the gate closes.
fn gated(active: Rc<Cell<bool>>, mut on_report: impl FnMut(bool)) -> impl FnMut(bool) {
    move |visible| {
        if active.get() {
            on_report(visible);
        }
    }
}

/// A live subscription plus the switch its callback checks. Releasing
/// closes the switch and hands the handle to `disconnect` at most once.
struct Subscription<T> {
    handle: Option<T>,
    active: Rc<Cell<bool>>,
}

impl<T> Subscription<T> {
    fn new(handle: T, active: Rc<Cell<bool>>) -> Self {
        Self {
            handle: Some(handle),
            active,
        }
    }

    fn release(&mut self, disconnect: impl FnOnce(T)) {
        self.active.set(false);
        if let Some(handle) = self.handle.take() {
            disconnect(handle);
        }
    }
}

/// An `IntersectionObserver` watching one element. Disconnects on drop.
pub struct VisibilityObserver {
    subscription: Subscription<IntersectionObserver>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Calls `on_report` with whether `target` is at least `threshold` visible
    /// every time the browser reports a crossing.
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_report: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        let active = Rc::new(Cell::new(true));
        let callback = {
            let mut on_report = gated(active.clone(), on_report);
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_report(meets_threshold(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        threshold,
                    ));
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("could not create IntersectionObserver: {:?}", err);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            subscription: Subscription::new(observer, active),
            _callback: callback,
        })
    }

    /// Stops observing. Calling it again, or dropping afterwards, is a no-op.
    pub fn disconnect(&mut self) {
        self.subscription.release(|observer| observer.disconnect());
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Flips to true the first time `node` is at least `threshold` on screen and
/// stays true for the life of the component.
#[hook]
pub fn use_seen_once(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut latch = VisibilityLatch::default();
                let observer = node.cast::<Element>().and_then(|element| {
                    VisibilityObserver::observe(&element, threshold, move |visible| {
                        if latch.report(visible) {
                            log::debug!("stats section became visible");
                            seen.set(true);
                        }
                    })
                });
                if observer.is_none() {
                    log::warn!("stats section is not observable, counters stay idle");
                }
                move || drop(observer)
            },
            node,
        );
    }

    *seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn threshold_needs_intersection_and_ratio() {
        assert!(meets_threshold(true, 0.3, 0.3));
        assert!(meets_threshold(true, 0.2999, 0.3));
        assert!(meets_threshold(true, 1.0, 0.3));
        assert!(!meets_threshold(true, 0.1, 0.3));
        assert!(!meets_threshold(false, 0.5, 0.3));
    }

    #[test]
    fn latch_fires_on_first_visible_report_only() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.report(false));
        assert!(!latch.fired());
        assert!(latch.report(true));
        assert!(!latch.report(true));
        assert!(!latch.report(false));
        assert!(!latch.report(true));
        assert!(latch.fired());
    }

    #[test]
    fn released_subscription_disconnects_once_and_silences_reports() {
        let active = Rc::new(Cell::new(true));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut report = {
            let seen = seen.clone();
            gated(active.clone(), move |visible| seen.borrow_mut().push(visible))
        };
        let disconnects = Rc::new(Cell::new(0));
        let mut subscription = Subscription::new("observer", active);

        report(false);
        report(true);
        assert_eq!(*seen.borrow(), vec![false, true]);

        for _ in 0..2 {
            let disconnects = disconnects.clone();
            subscription.release(move |_| disconnects.set(disconnects.get() + 1));
        }
        assert_eq!(disconnects.get(), 1);

        report(true);
        drop(subscription);
        report(true);
        assert_eq!(*seen.borrow(), vec![false, true]);
    }
}
