use yew::prelude::*;

use super::counter::{CounterAnimation, CounterDriver};
use super::raf::{now_ms, RafScheduler};
use crate::config;

/// Counts from 0 up to `target` once `start` turns true. The run is torn
/// down with the component.
#[hook]
pub fn use_counter(target: u32, start: bool) -> u32 {
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(target, start)| {
                let driver = start.then(|| {
                    CounterDriver::start(
                        CounterAnimation::new(target, config::COUNTER_DURATION_MS),
                        RafScheduler,
                        now_ms(),
                        move |v| value.set(v),
                    )
                });
                move || drop(driver)
            },
            (target, start),
        );
    }

    *value
}
