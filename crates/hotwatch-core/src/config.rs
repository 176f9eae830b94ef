use crate::app_config::{AppConfig, AtTargets};
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_2_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.0.3 Mobile/15E148 Safari/604.1";

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
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
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

    let dingtalk_access_token = require("HOTWATCH_DINGTALK_ACCESS_TOKEN")?;

    let log_level = or_default("HOTWATCH_LOG_LEVEL", "info");
    let keywords = split_list(&or_default("HOTWATCH_KEYWORDS", "南京,苏州,无锡"));
    let archive_dir = PathBuf::from(or_default("HOTWATCH_ARCHIVE_DIR", "./archive"));
    let user_agent = or_default("HOTWATCH_USER_AGENT", DEFAULT_USER_AGENT);

    let request_timeout_secs = parse_u64("HOTWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("HOTWATCH_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("HOTWATCH_RETRY_BACKOFF_BASE_MS", "1000")?;

    let weibo_base_url = or_default(
        "HOTWATCH_WEIBO_BASE_URL",
        "https://m.weibo.cn/api/container/getIndex",
    );
    let weibo_container_id = or_default(
        "HOTWATCH_WEIBO_CONTAINER_ID",
        "106003_-_type:25_-_filter_type:realtimespot",
    );
    let weibo_luicode = or_default("HOTWATCH_WEIBO_LUICODE", "10000011");
    let weibo_lfid = or_default("HOTWATCH_WEIBO_LFID", "231583");

    let dingtalk_base_url = or_default(
        "HOTWATCH_DINGTALK_BASE_URL",
        "https://oapi.dingtalk.com/robot/send",
    );
    let dingtalk_at = AtTargets {
        mobiles: split_list(&or_default("HOTWATCH_DINGTALK_AT_MOBILES", "")),
        user_ids: split_list(&or_default("HOTWATCH_DINGTALK_AT_USER_IDS", "")),
        all: parse_bool(
            "HOTWATCH_DINGTALK_AT_ALL",
            &or_default("HOTWATCH_DINGTALK_AT_ALL", "false"),
        )?,
    };

    Ok(AppConfig {
        log_level,
        keywords,
        archive_dir,
        user_agent,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        weibo_base_url,
        weibo_container_id,
        weibo_luicode,
        weibo_lfid,
        dingtalk_base_url,
        dingtalk_access_token,
        dingtalk_at,
    })
}

/// Splits a comma-separated list, trimming entries and dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
