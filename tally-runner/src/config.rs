//! Runner configuration
//!
//! The endpoints and the delay between cycles are fixed; `Config` gathers
//! them in one place so they can be validated at start-up and swapped in
//! tests.

use std::time::Duration;

/// Endpoint handing out pending tasks
pub const DEFAULT_FETCH_URL: &str = "https://interview.adpeai.com/api/v1/get-task";

/// Endpoint accepting computed results
pub const DEFAULT_SUBMIT_URL: &str = "https://interview.adpeai.com/api/v1/submit-task";

/// Pause between the end of one cycle and the start of the next
pub const DEFAULT_CYCLE_DELAY: Duration = Duration::from_millis(2000);

/// Runner configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Task-issuing endpoint (GET)
    pub fetch_url: String,

    /// Task-completion endpoint (POST)
    pub submit_url: String,

    /// Delay after each cycle settles, whether it succeeded or failed
    pub cycle_delay: Duration,
}

impl Config {
    /// Creates a configuration for the given endpoints with the default delay
    pub fn new(fetch_url: String, submit_url: String) -> Self {
        Self {
            fetch_url,
            submit_url,
            cycle_delay: DEFAULT_CYCLE_DELAY,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [("fetch_url", &self.fetch_url), ("submit_url", &self.submit_url)] {
            if url.is_empty() {
                anyhow::bail!("{} cannot be empty", name);
            }

            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.cycle_delay.is_zero() {
            anyhow::bail!("cycle_delay must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_FETCH_URL.to_string(),
            DEFAULT_SUBMIT_URL.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fetch_url, DEFAULT_FETCH_URL);
        assert_eq!(config.submit_url, DEFAULT_SUBMIT_URL);
        assert_eq!(config.cycle_delay, Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.fetch_url = String::new();
        assert!(config.validate().is_err());

        config.fetch_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.fetch_url = "http://localhost:8080/get-task".to_string();
        assert!(config.validate().is_ok());

        config.submit_url = "ftp://localhost/submit".to_string();
        assert!(config.validate().is_err());

        config.submit_url = "http://localhost:8080/submit-task".to_string();
        config.cycle_delay = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
