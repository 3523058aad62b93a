use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Simulated round trip before the navigation modal shows its result.
pub const LOADING_DELAY_MS: u32 = 2000;

/// Vertical distance a touch has to travel before it counts as a swipe.
pub const SWIPE_THRESHOLD_PX: i32 = 100;

pub const SWIPE_REVERT_MS: u32 = 200;

pub const ENTRANCE_STAGGER_SECS: f64 = 0.2;
