//! Browser console logging.

use log::LevelFilter;

/// Parse a level name, defaulting to `Info`.
pub fn level_from_name(name: Option<&str>) -> LevelFilter {
    name.and_then(|n| n.parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Install the console logger at `Info`. Once installed, the level is
/// only changed through [`set_level`].
pub fn install() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

pub fn set_level(level: LevelFilter) {
    install();
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_names_parse() {
        assert_eq!(level_from_name(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_name(Some("WARN")), LevelFilter::Warn);
        assert_eq!(level_from_name(Some("off")), LevelFilter::Off);
        assert_eq!(level_from_name(Some("nonsense")), LevelFilter::Info);
        assert_eq!(level_from_name(None), LevelFilter::Info);
    }
}
