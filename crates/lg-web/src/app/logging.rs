//! Platform-aware logging initialization.
//!
//! Web builds route `tracing` events to the browser console at the level
//! stored under [`LOG_LEVEL_KEY`]. Native builds install nothing.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

/// Local storage key holding the console log level (`error` .. `trace`).
pub const LOG_LEVEL_KEY: &str = "lg_web_log_level";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

static INIT: Once = Once::new();

/// Initialize logging for the current platform. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // no std::time in the browser

    tracing_subscriber::registry().with(get_log_level()).with(fmt_layer).init();
}

/// Parse a stored level name; unknown names are ignored.
pub fn parse_log_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

pub fn get_log_level() -> LevelFilter {
    #[cfg(feature = "web")]
    {
        use client_core::KeyValueStore;

        // Read before the subscriber exists, so failures stay silent.
        let stored = super::storage::open_store().get(LOG_LEVEL_KEY).ok().flatten();
        stored.as_deref().and_then(parse_log_level).unwrap_or(DEFAULT_LOG_LEVEL)
    }

    #[cfg(not(feature = "web"))]
    DEFAULT_LOG_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_log_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_log_level(" INFO "), Some(LevelFilter::INFO));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn native_builds_use_default_level() {
        #[cfg(not(feature = "web"))]
        assert_eq!(get_log_level(), DEFAULT_LOG_LEVEL);
        init();
        init();
    }
}
