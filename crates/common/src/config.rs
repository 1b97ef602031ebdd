//! Tracker configuration types.

use serde::{Deserialize, Serialize};

/// Top-level tracker configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Upstream artists API.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// In-memory cache policy.
    #[serde(default)]
    pub cache: CacheConfig,

    /// HTTP listener.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where and how to reach the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL, without trailing slash (e.g. `https://groupietrackers.herokuapp.com/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Cache refresh policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a snapshot is served before the next read refreshes it.
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

// ── Defaults ──────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "https://groupietrackers.herokuapp.com/api".into()
}
fn default_timeout() -> u64 {
    15
}
fn default_user_agent() -> String {
    "groupie-tracker/0.1".into()
}

fn default_ttl() -> u64 {
    2 * 60 * 60
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
