pub mod client;
pub mod error;
pub mod message;

pub use client::{DingTalkClient, DingTalkConfig};
pub use error::DingTalkError;
pub use message::{build_content, build_payload, TextMessage};
