use instant::Instant;
use std::time::Duration;

use super::constants::{DETAIL_DIVISOR, WHEEL_DELTA_DIVISOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

/// The legacy delta fields of a wheel event.
///
/// - `wheel_delta`: `WheelEvent.wheelDelta` (positive when scrolling up)
/// - `detail`: `UIEvent.detail` from `DOMMouseScroll` (positive when scrolling down)
///
/// Zero counts as absent, as it does in the browser's truthiness check.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelSample {
    pub wheel_delta: Option<f64>,
    pub detail: Option<f64>,
}

impl WheelSample {
    /// Normalised delta; positive means up. `None` when neither field is set.
    pub fn delta(&self) -> Option<f64> {
        match (self.wheel_delta, self.detail) {
            (Some(d), _) if d != 0.0 => Some(d / WHEEL_DELTA_DIVISOR),
            (_, Some(d)) if d != 0.0 => Some(-d / DETAIL_DIVISOR),
            _ => None,
        }
    }

    pub fn direction(&self) -> Option<WheelDirection> {
        self.delta().map(|d| {
            if d > 0.0 {
                WheelDirection::Up
            } else {
                WheelDirection::Down
            }
        })
    }
}

// Leading edge: the first event wins, anything within `min_interval` of the
// last accepted one is ignored.
#[derive(Clone, Debug)]
pub struct WheelDebouncer {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl WheelDebouncer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now < last || now.duration_since(last) < self.min_interval {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}

#[derive(Clone, Debug)]
pub struct WheelNavigator {
    debouncer: WheelDebouncer,
}

impl WheelNavigator {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            debouncer: WheelDebouncer::new(min_interval),
        }
    }

    /// Slide to request for this event, or `None` when the event is
    /// debounced, carries no direction, or would run past either end.
    /// A directionless event still restarts the debounce window.
    pub fn target(
        &mut self,
        sample: &WheelSample,
        now: Instant,
        current: usize,
        len: usize,
    ) -> Option<usize> {
        if !self.debouncer.accept(now) {
            return None;
        }
        match sample.direction()? {
            WheelDirection::Down if current + 1 < len => Some(current + 1),
            WheelDirection::Up if current > 0 => Some(current - 1),
            _ => None,
        }
    }
}
