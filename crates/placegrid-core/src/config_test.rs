use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("PLACES_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PLACES_API_KEY"),
        "expected MissingEnvVar(PLACES_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
    assert_eq!(cfg.places_api_key, "test-key");
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "placegrid/0.1 (places-harvest)");
    assert_eq!(cfg.request_delay_ms, 1000);
    assert_eq!(cfg.page_token_delay_ms, 2000);
    assert_eq!(cfg.details_delay_ms, 500);
    assert_eq!(cfg.max_unique_per_point, 60);
    assert_eq!(cfg.grid_size, 6);
    assert_eq!(cfg.radius_m, 3000);
    assert_eq!(cfg.max_depth, 2);
}

#[test]
fn page_token_delay_override() {
    let mut map = full_env();
    map.insert("PLACEGRID_PAGE_TOKEN_DELAY_MS", "3500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_token_delay_ms, 3500);
}

#[test]
fn grid_overrides_are_applied() {
    let mut map = full_env();
    map.insert("PLACEGRID_GRID_SIZE", "4");
    map.insert("PLACEGRID_RADIUS_M", "1500");
    map.insert("PLACEGRID_MAX_DEPTH", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.grid_size, 4);
    assert_eq!(cfg.radius_m, 1500);
    assert_eq!(cfg.max_depth, 0);
}

#[test]
fn request_delay_invalid() {
    let mut map = full_env();
    map.insert("PLACEGRID_REQUEST_DELAY_MS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEGRID_REQUEST_DELAY_MS"),
        "expected InvalidEnvVar(PLACEGRID_REQUEST_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn negative_radius_is_invalid() {
    let mut map = full_env();
    map.insert("PLACEGRID_RADIUS_M", "-10");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEGRID_RADIUS_M"),
        "expected InvalidEnvVar(PLACEGRID_RADIUS_M), got: {result:?}"
    );
}

#[test]
fn zero_unique_cap_is_invalid() {
    let mut map = full_env();
    map.insert("PLACEGRID_MAX_UNIQUE_PER_POINT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEGRID_MAX_UNIQUE_PER_POINT"),
        "expected InvalidEnvVar(PLACEGRID_MAX_UNIQUE_PER_POINT), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-key"));
    assert!(rendered.contains("[redacted]"));
}
