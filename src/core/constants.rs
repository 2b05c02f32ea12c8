// Selectors and class names shared by the carousel, wheel and side-menu wiring.

// Timing (milliseconds)
pub const ANIMATION_DURATION_MS: u64 = 500; // track slide + lock hold time
pub const WHEEL_SCROLL_DELAY_MS: u64 = 100; // min gap between accepted wheel events

// Carousel markup
pub const TRACK_SELECTOR: &str = ".carousel_track";
pub const NEXT_BUTTON_SELECTOR: &str = ".carousel_button--right";
pub const PREV_BUTTON_SELECTOR: &str = ".carousel_button--left";
pub const DOTS_NAV_SELECTOR: &str = ".carousel_nav";

// Carousel state classes
pub const CURRENT_SLIDE_CLASS: &str = "current-slide";
pub const HIDDEN_ARROW_CLASS: &str = "is-hidden";
pub const REVEAL_TEXT_CLASS: &str = "reveal-text";

// Slide texts that replay their entrance animation on activation.
pub const REVEAL_TEXT_SELECTORS: [&str; 3] =
    [".c-hero__headline", ".c-hero__subheadline", ".c-hero__Para"];

// Side menu markup
pub const SIDE_MENU_SELECTOR: &str = ".nav-active";
pub const HAMBURGER_MENU_SELECTOR: &str = ".menu-nav";
pub const HAMBURGER_TOGGLE_ID: &str = "toggle-checkbox";

// Selected-entry class per slide index; at most one is applied at a time.
pub const SIDE_MENU_CLASSES: [&str; 6] = [
    "selected-nav-ma",         // home
    "selected-nav-design",     // property
    "selected-nav-dev",        // legal consulting
    "selected-nav-app",        // finance
    "selected-nav-digimarket", // asset care
    "selected-nav-about",      // about us
];

// Optional timing overrides read from the track element's dataset
pub const ANIMATION_MS_DATA_KEY: &str = "animationMs"; // data-animation-ms
pub const WHEEL_DELAY_MS_DATA_KEY: &str = "wheelDelayMs"; // data-wheel-delay-ms

// Legacy wheel normalisation
pub const WHEEL_DELTA_DIVISOR: f64 = 60.0;
pub const DETAIL_DIVISOR: f64 = 2.0;
