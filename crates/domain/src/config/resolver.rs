use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Server used when a lookup does not name one.
pub const DEFAULT_SERVER: &str = "8.8.8.8:53";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// `host:port` of the recursive server
    #[serde(default = "default_server")]
    pub server: String,

    /// Receive timeout for a single attempt, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Total tries when an attempt times out
    #[serde(default = "default_attempts")]
    pub attempts: u32,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout_ms: default_timeout_ms(),
            attempts: default_attempts(),
        }
    }
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_attempts() -> u32 {
    2
}
