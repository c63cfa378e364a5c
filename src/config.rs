use std::{env, time::Duration};

pub const WINDOW_NAME: &str = "Loaded Image";
pub const PROGRAM_NAME: &str = "load_image_show";

/// Bounds the key wait when set to a positive number of milliseconds.
pub const TIMEOUT_VAR: &str = "LOAD_IMAGE_SHOW_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub window_name: String,
    /// `None` blocks until a key arrives.
    pub wait: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_name: WINDOW_NAME.to_string(),
            wait: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var(TIMEOUT_VAR) {
            config.wait = parse_timeout(&raw);
        }

        config
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(err) => {
            log::warn!("ignoring {TIMEOUT_VAR}={raw:?}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_wait_forever() {
        let config = Config::default();

        assert_eq!(config.window_name, "Loaded Image");
        assert_eq!(config.wait, None);
    }

    #[test]
    fn environment_bounds_the_wait() {
        env::set_var(TIMEOUT_VAR, "1500");
        let bounded = Config::from_env();
        env::set_var(TIMEOUT_VAR, "0");
        let zero = Config::from_env();
        env::remove_var(TIMEOUT_VAR);
        let unset = Config::from_env();

        assert_eq!(bounded.wait, Some(Duration::from_millis(1500)));
        assert_eq!(bounded.window_name, WINDOW_NAME);
        assert_eq!(zero.wait, None);
        assert_eq!(unset, Config::default());
    }

    #[test]
    fn timeout_parsing() {
        assert_eq!(parse_timeout("250"), Some(Duration::from_millis(250)));
        assert_eq!(parse_timeout(" 5000 "), Some(Duration::from_secs(5)));
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("-3"), None);
        assert_eq!(parse_timeout("soon"), None);
    }
}
