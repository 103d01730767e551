use log::Level;

/// Past this offset the header switches to its frosted background.
pub const SCROLL_THRESHOLD: u32 = 10;

/// Above this offset the header is always shown, whatever the scroll direction.
pub const NEAR_TOP_THRESHOLD: u32 = 100;

/// Delay between automatic project slides. Zero turns auto-advance off.
pub const CAROUSEL_AUTOPLAY_MS: u32 = 6_000;

pub const CONTACT_EMAIL: &str = "info@binghatti.com";
pub const CONTACT_PHONE: &str = "+971 4 123 4567";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
