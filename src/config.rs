use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay between hiding the booking modal and wiping its form, long enough
/// for the close transition to finish.
pub const MODAL_RESET_DELAY_MS: u32 = 300;

/// How long the success view stays up before the modal closes itself.
pub const AUTO_CLOSE_DELAY_MS: u32 = 3_000;

/// Height of the fixed header, subtracted when scrolling to an anchor.
pub const HEADER_OFFSET: f64 = 80.0;

/// Scroll-spy looks this far below the viewport top when picking a section.
pub const SPY_LOOKAHEAD: f64 = 100.0;

pub const REVEAL_SELECTORS: &str = ".card, .card-service, .testimonial";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const REVEAL_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.5s ease-out, transform 0.5s ease-out";
