use log::Level;

/// Wall-clock length of one stats counter run, in milliseconds.
pub const COUNTER_DURATION_MS: f64 = 1200.0;

/// Fraction of the stats section that has to be on screen before the counters start.
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.3;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running `trunk serve` locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
