use std::str::FromStr;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it from a
/// `HashMap` without `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let places_api_key = require("PLACES_API_KEY")?;
    let api_base_url = or_default("PLACEGRID_API_BASE_URL", DEFAULT_API_BASE_URL);
    let log_level = or_default("PLACEGRID_LOG_LEVEL", "info");
    let user_agent = or_default("PLACEGRID_USER_AGENT", "placegrid/0.1 (places-harvest)");

    let request_timeout_secs: u64 = parse_var(&lookup, "PLACEGRID_REQUEST_TIMEOUT_SECS", "30")?;
    let request_delay_ms: u64 = parse_var(&lookup, "PLACEGRID_REQUEST_DELAY_MS", "1000")?;
    let page_token_delay_ms: u64 = parse_var(&lookup, "PLACEGRID_PAGE_TOKEN_DELAY_MS", "2000")?;
    let details_delay_ms: u64 = parse_var(&lookup, "PLACEGRID_DETAILS_DELAY_MS", "500")?;
    let max_unique_per_point: usize = parse_var(&lookup, "PLACEGRID_MAX_UNIQUE_PER_POINT", "60")?;
    let grid_size: usize = parse_var(&lookup, "PLACEGRID_GRID_SIZE", "6")?;
    let radius_m: u32 = parse_var(&lookup, "PLACEGRID_RADIUS_M", "3000")?;
    let max_depth: u32 = parse_var(&lookup, "PLACEGRID_MAX_DEPTH", "2")?;

    if max_unique_per_point == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACEGRID_MAX_UNIQUE_PER_POINT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        places_api_key,
        api_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        request_delay_ms,
        page_token_delay_ms,
        details_delay_ms,
        max_unique_per_point,
        grid_size,
        radius_m,
        max_depth,
    })
}

fn parse_var<F, T>(lookup: &F, var: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(var).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
