//! Configuration loader: merges defaults, config.toml, .env and environment.

use common::Error;
use common::TrackerConfig;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn parse_positive_u64(raw: &str, env_name: &str) -> Result<u64, Error> {
    let parsed = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::Config(format!("{env_name} must be an integer > 0")))?;
    if parsed == 0 {
        return Err(Error::Config(format!("{env_name} must be an integer > 0")));
    }
    Ok(parsed)
}

fn parse_port(raw: &str, env_name: &str) -> Result<u16, Error> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| Error::Config(format!("{env_name} must be a port number")))
}

pub fn validate_config(config: &TrackerConfig) -> Result<(), Error> {
    let mut issues: Vec<String> = Vec::new();

    let base_url = config.upstream.base_url.trim();
    if base_url.is_empty() {
        issues.push("upstream.base_url must not be empty".into());
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        issues.push("upstream.base_url must be an http(s) URL".into());
    }
    if config.upstream.timeout_secs == 0 {
        issues.push("upstream.timeout_secs must be > 0".into());
    }
    if config.cache.ttl_secs == 0 {
        issues.push("cache.ttl_secs must be > 0".into());
    }
    if config.server.host.trim().is_empty() {
        issues.push("server.host must not be empty".into());
    }
    if config.server.port == 0 {
        issues.push("server.port must be > 0".into());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "Invalid config:\n - {}",
            issues.join("\n - ")
        )))
    }
}

/// Apply `GROUPIE_*` overrides using `lookup` to read variables.
pub fn apply_env<F>(config: &mut TrackerConfig, lookup: F) -> Result<(), Error>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("GROUPIE_API_BASE_URL") {
        config.upstream.base_url = url.trim().to_string();
    }
    if let Some(raw) = lookup("GROUPIE_TIMEOUT_SECS") {
        config.upstream.timeout_secs = parse_positive_u64(&raw, "GROUPIE_TIMEOUT_SECS")?;
    }
    if let Some(raw) = lookup("GROUPIE_CACHE_TTL_SECS") {
        config.cache.ttl_secs = parse_positive_u64(&raw, "GROUPIE_CACHE_TTL_SECS")?;
    }
    if let Some(host) = lookup("GROUPIE_HOST") {
        config.server.host = host.trim().to_string();
    }
    if let Some(raw) = lookup("GROUPIE_PORT") {
        config.server.port = parse_port(&raw, "GROUPIE_PORT")?;
    }
    Ok(())
}

/// Read a TOML config file. A missing default file is not an error; a
/// missing explicitly named one is.
pub fn read_config_file(path: Option<&Path>) -> Result<TrackerConfig, Error> {
    let (path, explicit) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    if !path.exists() {
        if explicit {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(TrackerConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Load configuration from an optional TOML file and the environment.
///
/// CLI overrides are applied by the caller, which then runs
/// [`validate_config`].
pub fn load_config(path: Option<&Path>) -> Result<TrackerConfig, Error> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    let mut config = read_config_file(path)?;
    apply_env(&mut config, |name| std::env::var(name).ok())?;
    Ok(config)
}
