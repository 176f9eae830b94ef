pub mod app_config;
pub mod config;
pub mod error;
pub mod filter;
pub mod types;

pub use app_config::{AppConfig, AtTargets};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use filter::{filter_by_keywords, matching_descriptions};
pub use types::HotItem;
