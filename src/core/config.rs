use std::time::Duration;

use super::constants::{
    ANIMATION_DURATION_MS, ANIMATION_MS_DATA_KEY, WHEEL_DELAY_MS_DATA_KEY, WHEEL_SCROLL_DELAY_MS,
};

// `animation_duration` is how long the transition lock is held after a change,
// `wheel_debounce` the minimum gap between two accepted wheel events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    pub animation_duration: Duration,
    pub wheel_debounce: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            animation_duration: Duration::from_millis(ANIMATION_DURATION_MS),
            wheel_debounce: Duration::from_millis(WHEEL_SCROLL_DELAY_MS),
        }
    }
}

impl CarouselConfig {
    /// Apply millisecond overrides looked up by dataset key (`animationMs`,
    /// `wheelDelayMs`). Values that do not parse are logged and skipped.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(ms) = parse_ms(&lookup, ANIMATION_MS_DATA_KEY) {
            self.animation_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_ms(&lookup, WHEEL_DELAY_MS_DATA_KEY) {
            self.wheel_debounce = Duration::from_millis(ms);
        }
        self
    }
}

fn parse_ms(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            log::warn!("[config] ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
