pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::{WeiboClient, WeiboConfig};
pub use error::WeiboError;
