//! Check configuration

use tokio::time::Duration;

/// Endpoint answering 200 only over IPv6
pub const DEFAULT_IPV6_URL: &str = "https://check-ipv6.sangmin.eu.org/check.json";

/// Endpoint answering 200 only over IPv4
pub const DEFAULT_IPV4_URL: &str = "https://check-ipv4.sangmin.eu.org/check.json";

/// Default per-probe timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default countdown before exit in seconds
pub const DEFAULT_COUNTDOWN_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub ipv6_url: String,
    pub ipv4_url: String,
    pub timeout: Duration,
    pub countdown: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            ipv6_url: DEFAULT_IPV6_URL.to_string(),
            ipv4_url: DEFAULT_IPV4_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            countdown: DEFAULT_COUNTDOWN_SECS,
        }
    }
}
