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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("HOTWATCH_DINGTALK_ACCESS_TOKEN", "test-token");
    m
}

#[test]
fn build_app_config_fails_without_access_token() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "HOTWATCH_DINGTALK_ACCESS_TOKEN"),
        "expected MissingEnvVar(HOTWATCH_DINGTALK_ACCESS_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_access_token_as_missing() {
    let mut map = HashMap::new();
    map.insert("HOTWATCH_DINGTALK_ACCESS_TOKEN", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.dingtalk_access_token, "test-token");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.keywords, vec!["南京", "苏州", "无锡"]);
    assert_eq!(cfg.archive_dir.to_str(), Some("./archive"));
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.max_retries, 3);
    assert_eq!(cfg.retry_backoff_base_ms, 1000);
    assert_eq!(
        cfg.weibo_base_url,
        "https://m.weibo.cn/api/container/getIndex"
    );
    assert_eq!(
        cfg.weibo_container_id,
        "106003_-_type:25_-_filter_type:realtimespot"
    );
    assert_eq!(cfg.weibo_luicode, "10000011");
    assert_eq!(cfg.weibo_lfid, "231583");
    assert_eq!(cfg.dingtalk_base_url, "https://oapi.dingtalk.com/robot/send");
    assert_eq!(cfg.dingtalk_at, AtTargets::default());
}

#[test]
fn keywords_override_is_split_and_trimmed() {
    let mut map = full_env();
    map.insert("HOTWATCH_KEYWORDS", " 杭州 , ,宁波,");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.keywords, vec!["杭州", "宁波"]);
}

#[test]
fn at_targets_are_parsed() {
    let mut map = full_env();
    map.insert("HOTWATCH_DINGTALK_AT_MOBILES", "13800000000,13900000000");
    map.insert("HOTWATCH_DINGTALK_AT_USER_IDS", "user-a");
    map.insert("HOTWATCH_DINGTALK_AT_ALL", "TRUE");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.dingtalk_at.mobiles, vec!["13800000000", "13900000000"]);
    assert_eq!(cfg.dingtalk_at.user_ids, vec!["user-a"]);
    assert!(cfg.dingtalk_at.all);
}

#[test]
fn at_all_invalid() {
    let mut map = full_env();
    map.insert("HOTWATCH_DINGTALK_AT_ALL", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTWATCH_DINGTALK_AT_ALL"),
        "expected InvalidEnvVar(HOTWATCH_DINGTALK_AT_ALL), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_override() {
    let mut map = full_env();
    map.insert("HOTWATCH_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("HOTWATCH_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTWATCH_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(HOTWATCH_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn max_retries_override() {
    let mut map = full_env();
    map.insert("HOTWATCH_MAX_RETRIES", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_retries, 0);
}

#[test]
fn max_retries_invalid() {
    let mut map = full_env();
    map.insert("HOTWATCH_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTWATCH_MAX_RETRIES"),
        "expected InvalidEnvVar(HOTWATCH_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn retry_backoff_base_ms_invalid() {
    let mut map = full_env();
    map.insert("HOTWATCH_RETRY_BACKOFF_BASE_MS", "1s");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTWATCH_RETRY_BACKOFF_BASE_MS"),
        "expected InvalidEnvVar(HOTWATCH_RETRY_BACKOFF_BASE_MS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_access_token() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-token"));
    assert!(rendered.contains("[redacted]"));
}
