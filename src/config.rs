use log::Level;

/// Vertical offset, in pixels, past which the header switches to its compact look.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fraction of an element that must be on screen before its entrance animation plays.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
