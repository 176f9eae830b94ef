use std::path::PathBuf;

/// Who the DingTalk robot should @-mention on each message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtTargets {
    pub mobiles: Vec<String>,
    pub user_ids: Vec<String>,
    pub all: bool,
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub keywords: Vec<String>,
    pub archive_dir: PathBuf,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub weibo_base_url: String,
    pub weibo_container_id: String,
    pub weibo_luicode: String,
    pub weibo_lfid: String,
    pub dingtalk_base_url: String,
    pub dingtalk_access_token: String,
    pub dingtalk_at: AtTargets,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("keywords", &self.keywords)
            .field("archive_dir", &self.archive_dir)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("weibo_base_url", &self.weibo_base_url)
            .field("weibo_container_id", &self.weibo_container_id)
            .field("weibo_luicode", &self.weibo_luicode)
            .field("weibo_lfid", &self.weibo_lfid)
            .field("dingtalk_base_url", &self.dingtalk_base_url)
            .field("dingtalk_access_token", &"[redacted]")
            .field("dingtalk_at", &self.dingtalk_at)
            .finish()
    }
}
