//! Location of the remote GDD computation service.

use std::time::Duration;

/// Public deployment of the GDD service.
pub const DEFAULT_SERVICE_URL: &str = "https://gdd-sw.onrender.com";

/// Seconds to wait for the service before giving up (native client only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the GDD service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Scheme and host, optionally with a path prefix, without the `/gdd` endpoint.
    pub base_url: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the `/gdd` endpoint.
    pub fn gdd_url(&self) -> String {
        format!("{}/gdd", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_service() {
        let config = ServiceConfig::default();
        assert_eq!(config.gdd_url(), "https://gdd-sw.onrender.com/gdd");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let config = ServiceConfig::new("http://localhost:5000/");
        assert_eq!(config.gdd_url(), "http://localhost:5000/gdd");
    }
}
