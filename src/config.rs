use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical scroll offset (px) past which the navbar switches to its solid style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

pub const COUNTER_DURATION_MS: u32 = 2000;

/// How long the contact acknowledgment stays on screen.
pub const ACKNOWLEDGMENT_DISMISS_MS: u32 = 5000;
