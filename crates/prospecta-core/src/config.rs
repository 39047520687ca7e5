use crate::app_config::{
    AppConfig, DEFAULT_REGISTRY_BASE_URL, DEFAULT_SEARCH_BASE_URL, DEFAULT_SITE_USER_AGENT,
};
use crate::ConfigError;

/// Largest page the search API serves per request.
pub const MAX_SEARCH_PAGE_SIZE: u32 = 10;

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
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    // Blank credentials fail exactly like absent ones: every search would be
    // rejected by the API.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let search_api_key = require("PROSPECTA_SEARCH_API_KEY")?;
    let search_engine_id = require("PROSPECTA_SEARCH_ENGINE_ID")?;
    let search_base_url = or_default("PROSPECTA_SEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL);
    let search_timeout_secs = parse_u64("PROSPECTA_SEARCH_TIMEOUT_SECS", "10")?;

    let search_page_size = parse_u32("PROSPECTA_SEARCH_PAGE_SIZE", "10")?;
    if !(1..=MAX_SEARCH_PAGE_SIZE).contains(&search_page_size) {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROSPECTA_SEARCH_PAGE_SIZE".to_string(),
            reason: format!("must be between 1 and {MAX_SEARCH_PAGE_SIZE}, got {search_page_size}"),
        });
    }

    let search_max_concurrent = parse_usize("PROSPECTA_SEARCH_MAX_CONCURRENT", "1")?;
    if search_max_concurrent == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROSPECTA_SEARCH_MAX_CONCURRENT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let site_timeout_secs = parse_u64("PROSPECTA_SITE_TIMEOUT_SECS", "8")?;
    let site_user_agent = or_default("PROSPECTA_SITE_USER_AGENT", DEFAULT_SITE_USER_AGENT);
    let max_variants = parse_usize("PROSPECTA_MAX_VARIANTS", "8")?;
    let variant_delay_ms = parse_u64("PROSPECTA_VARIANT_DELAY_MS", "1000")?;
    let export_dir = PathBuf::from(or_default("PROSPECTA_EXPORT_DIR", "exports"));
    let filters_path = lookup("PROSPECTA_FILTERS_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);
    let registry_base_url = or_default("PROSPECTA_REGISTRY_BASE_URL", DEFAULT_REGISTRY_BASE_URL);
    let registry_timeout_secs = parse_u64("PROSPECTA_REGISTRY_TIMEOUT_SECS", "5")?;
    let log_level = or_default("PROSPECTA_LOG_LEVEL", "info");

    Ok(AppConfig {
        search_api_key,
        search_engine_id,
        search_base_url,
        search_timeout_secs,
        search_page_size,
        search_max_concurrent,
        site_timeout_secs,
        site_user_agent,
        max_variants,
        variant_delay_ms,
        export_dir,
        filters_path,
        registry_base_url,
        registry_timeout_secs,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
