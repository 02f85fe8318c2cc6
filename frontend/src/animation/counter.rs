//! Count-up animation for the stats section.
//!
//! [`CounterAnimation`] is the pure state machine: it only knows about
//! timestamps handed to it. [`CounterDriver`] pairs it with a
//! [`FrameScheduler`] so the page can run it off `requestAnimationFrame`
//! while tests drive it with a fake clock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

/// Something that can run a callback before the next repaint.
pub trait FrameScheduler: 'static {
    type Handle: 'static;

    /// Queues `callback`, which receives the frame timestamp in milliseconds.
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    NotStarted,
    Running { started_at: f64 },
    Completed,
    Cancelled,
}

/// One frame's worth of output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u32,
    pub done: bool,
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    duration_ms: f64,
    phase: CounterPhase,
    value: u32,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            phase: CounterPhase::NotStarted,
            value: 0,
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Begins the run at `now`. Returns false if a run already happened or
    /// is in progress; there are no restarts.
    pub fn start(&mut self, now: f64) -> bool {
        if self.phase != CounterPhase::NotStarted {
            return false;
        }
        self.phase = CounterPhase::Running { started_at: now };
        true
    }

    /// Advances to the frame at `now`. `None` unless the run is active.
    pub fn tick(&mut self, now: f64) -> Option<CounterFrame> {
        let CounterPhase::Running { started_at } = self.phase else {
            return None;
        };

        let progress = if self.duration_ms > 0.0 {
            ((now - started_at) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = ease_out_cubic(progress);
        // Frame timestamps can jitter; never count backwards.
        let value = ((eased * self.target as f64).round() as u32).clamp(self.value, self.target);
        self.value = value;

        let done = progress >= 1.0;
        if done {
            self.value = self.target;
            self.phase = CounterPhase::Completed;
        }
        Some(CounterFrame {
            value: self.value,
            done,
        })
    }

    pub fn cancel(&mut self) {
        if matches!(self.phase, CounterPhase::NotStarted | CounterPhase::Running { .. }) {
            self.phase = CounterPhase::Cancelled;
        }
    }
}

struct DriverState<S: FrameScheduler> {
    animation: CounterAnimation,
    scheduler: S,
    pending: Option<S::Handle>,
    on_value: Rc<dyn Fn(u32)>,
}

/// Owns a running [`CounterAnimation`]. Dropping the driver cancels the
/// pending frame, so nothing fires against a torn-down view.
pub struct CounterDriver<S: FrameScheduler> {
    state: Rc<RefCell<DriverState<S>>>,
}

impl<S: FrameScheduler> CounterDriver<S> {
    pub fn start(
        animation: CounterAnimation,
        scheduler: S,
        now: f64,
        on_value: impl Fn(u32) + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(DriverState {
            animation,
            scheduler,
            pending: None,
            on_value: Rc::new(on_value),
        }));

        let started = state.borrow_mut().animation.start(now);
        if started {
            debug!("counter run started at {now:.1}ms");
            schedule_next(&state);
        }
        Self { state }
    }

    #[cfg(test)]
    pub fn phase(&self) -> CounterPhase {
        self.state.borrow().animation.phase()
    }

    /// Stops the run and releases the pending frame. Safe to call repeatedly.
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.animation.cancel();
        if let Some(handle) = state.pending.take() {
            state.scheduler.cancel(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for CounterDriver<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_next<S: FrameScheduler>(state: &Rc<RefCell<DriverState<S>>>) {
    let weak: Weak<RefCell<DriverState<S>>> = Rc::downgrade(state);
    let callback = Box::new(move |now: f64| {
        if let Some(state) = weak.upgrade() {
            on_frame(&state, now);
        }
    });

    let mut guard = state.borrow_mut();
    let handle = guard.scheduler.request(callback);
    if handle.is_none() {
        log::warn!("no frame scheduler available, counter stays at {}", guard.animation.value());
    }
    guard.pending = handle;
}

fn on_frame<S: FrameScheduler>(state: &Rc<RefCell<DriverState<S>>>, now: f64) {
    let (frame, on_value) = {
        let mut guard = state.borrow_mut();
        guard.pending = None;
        let Some(frame) = guard.animation.tick(now) else {
            return;
        };
        (frame, guard.on_value.clone())
    };

    // Borrow released before notifying, the listener may re-render.
    on_value(frame.value);

    if frame.done {
        debug!("counter run completed at {}", frame.value);
        return;
    }
    let still_running = matches!(state.borrow().animation.phase(), CounterPhase::Running { .. });
    if still_running {
        schedule_next(state);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::FrameScheduler;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    type Pending = (u32, Box<dyn FnOnce(f64)>);

    /// Manual frame clock. Callbacks only run when the test calls
    /// [`FakeScheduler::run_frame`].
    #[derive(Clone, Default)]
    pub struct FakeScheduler {
        queue: Rc<RefCell<VecDeque<Pending>>>,
        next_id: Rc<RefCell<u32>>,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl FakeScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        pub fn cancelled(&self) -> Vec<u32> {
            self.cancelled.borrow().clone()
        }

        /// Runs every callback queued before this call. Returns how many ran.
        pub fn run_frame(&self, now: f64) -> usize {
            let due: Vec<Pending> = self.queue.borrow_mut().drain(..).collect();
            let ran = due.len();
            for (_, callback) in due {
                callback(now);
            }
            ran
        }
    }

    impl FrameScheduler for FakeScheduler {
        type Handle = u32;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<u32> {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            let id = *next_id;
            self.queue.borrow_mut().push_back((id, callback));
            Some(id)
        }

        fn cancel(&self, handle: u32) {
            self.queue.borrow_mut().retain(|(id, _)| *id != handle);
            self.cancelled.borrow_mut().push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeScheduler;
    use super::*;
    use pretty_assertions::assert_eq;

    const DURATION: f64 = 1200.0;

    fn recording_driver(
        target: u32,
        scheduler: &FakeScheduler,
        start: f64,
    ) -> (CounterDriver<FakeScheduler>, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let driver = CounterDriver::start(
            CounterAnimation::new(target, DURATION),
            scheduler.clone(),
            start,
            move |v| sink.borrow_mut().push(v),
        );
        (driver, seen)
    }

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn animation_reaches_target_exactly() {
        let mut anim = CounterAnimation::new(120, DURATION);
        assert!(anim.start(1_000.0));
        assert_eq!(anim.tick(1_000.0), Some(CounterFrame { value: 0, done: false }));
        assert_eq!(anim.tick(1_600.0), Some(CounterFrame { value: 105, done: false }));
        assert_eq!(anim.tick(2_200.0), Some(CounterFrame { value: 120, done: true }));
        assert_eq!(anim.phase(), CounterPhase::Completed);
        assert_eq!(anim.tick(3_000.0), None);
    }

    #[test]
    fn frames_before_start_timestamp_read_zero() {
        let mut anim = CounterAnimation::new(48, DURATION);
        anim.start(500.0);
        assert_eq!(anim.tick(490.0).map(|f| f.value), Some(0));
    }

    #[test]
    fn start_only_once() {
        let mut anim = CounterAnimation::new(99, DURATION);
        assert!(anim.start(0.0));
        anim.tick(600.0);
        let before = anim.value();
        assert!(!anim.start(700.0));
        assert_eq!(anim.phase(), CounterPhase::Running { started_at: 0.0 });
        anim.tick(650.0);
        assert!(anim.value() >= before);
    }

    #[test]
    fn cancelled_animation_ignores_ticks_and_starts() {
        let mut anim = CounterAnimation::new(10, DURATION);
        anim.start(0.0);
        anim.cancel();
        assert_eq!(anim.tick(100.0), None);
        assert!(!anim.start(200.0));
        assert_eq!(anim.phase(), CounterPhase::Cancelled);
    }

    #[test]
    fn driver_produces_monotonic_sequence_ending_at_target() {
        let scheduler = FakeScheduler::default();
        let (driver, seen) = recording_driver(120, &scheduler, 0.0);

        let mut now = 0.0;
        while scheduler.pending() > 0 {
            now += 16.7;
            scheduler.run_frame(now);
        }

        let seen = seen.borrow();
        assert!(!seen.is_empty());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{seen:?}");
        assert!(seen.iter().all(|v| *v <= 120));
        assert_eq!(*seen.last().unwrap(), 120);
        assert_eq!(driver.phase(), CounterPhase::Completed);
        assert!(now >= DURATION);
    }

    #[test]
    fn driver_stops_scheduling_after_completion() {
        let scheduler = FakeScheduler::default();
        let (_driver, seen) = recording_driver(5, &scheduler, 0.0);

        scheduler.run_frame(5_000.0);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(*seen.borrow(), vec![5]);
    }

    #[test]
    fn dropping_driver_cancels_pending_frame() {
        let scheduler = FakeScheduler::default();
        let (driver, seen) = recording_driver(120, &scheduler, 0.0);
        scheduler.run_frame(100.0);
        assert_eq!(scheduler.pending(), 1);

        drop(driver);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.cancelled().len(), 1);
        assert_eq!(scheduler.run_frame(200.0), 0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn cancel_is_idempotent() {
        let scheduler = FakeScheduler::default();
        let (driver, seen) = recording_driver(48, &scheduler, 0.0);

        driver.cancel();
        driver.cancel();
        assert_eq!(driver.phase(), CounterPhase::Cancelled);
        assert_eq!(scheduler.cancelled().len(), 1);

        drop(driver);
        assert_eq!(scheduler.cancelled().len(), 1);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn callback_that_outlives_driver_is_a_no_op() {
        // A scheduler that cannot cancel still must not reach a dropped driver.
        struct LeakyScheduler(Rc<RefCell<Vec<Box<dyn FnOnce(f64)>>>>);
        impl FrameScheduler for LeakyScheduler {
            type Handle = ();
            fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<()> {
                self.0.borrow_mut().push(callback);
                Some(())
            }
            fn cancel(&self, _: ()) {}
        }

        let queued = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let driver = CounterDriver::start(
            CounterAnimation::new(120, DURATION),
            LeakyScheduler(queued.clone()),
            0.0,
            move |v| sink.borrow_mut().push(v),
        );
        drop(driver);

        for callback in queued.borrow_mut().drain(..) {
            callback(600.0);
        }
        assert!(seen.borrow().is_empty());
    }
}
