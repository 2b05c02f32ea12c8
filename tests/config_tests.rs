// Host-side tests for timing configuration and shared constants.
// The main crate is wasm-only, so the core modules come in through `common`.

mod common;

use common::core::*;
use std::collections::HashMap;
use std::time::Duration;

fn dataset(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_match_page_timings() {
    let config = CarouselConfig::default();
    assert_eq!(config.animation_duration, Duration::from_millis(500));
    assert_eq!(config.wheel_debounce, Duration::from_millis(100));
}

#[test]
fn dataset_overrides_replace_defaults() {
    let data = dataset(&[("animationMs", "750"), ("wheelDelayMs", " 250 ")]);
    let config = CarouselConfig::default().with_overrides(|k| data.get(k).cloned());

    assert_eq!(config.animation_duration, Duration::from_millis(750));
    assert_eq!(config.wheel_debounce, Duration::from_millis(250));
}

#[test]
fn unparsable_overrides_are_ignored() {
    let data = dataset(&[("animationMs", "fast"), ("wheelDelayMs", "-5")]);
    let config = CarouselConfig::default().with_overrides(|k| data.get(k).cloned());

    assert_eq!(config, CarouselConfig::default());
}

#[test]
fn missing_overrides_keep_defaults() {
    let config = CarouselConfig::default().with_overrides(|_| None);
    assert_eq!(config, CarouselConfig::default());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_sane() {
    assert!(ANIMATION_DURATION_MS > 0);
    assert!(WHEEL_SCROLL_DELAY_MS > 0);
    // One wheel notch should not outlast a slide transition.
    assert!(WHEEL_SCROLL_DELAY_MS < ANIMATION_DURATION_MS);
}

#[test]
fn reveal_selectors_are_class_selectors() {
    for sel in REVEAL_TEXT_SELECTORS {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
    }
    assert_eq!(SIDE_MENU_CLASSES.len(), 6);
}
