//! Text-message payload for the DingTalk custom robot.

use chrono::NaiveDateTime;
use hotwatch_core::AtTargets;
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "微博新增实时上升热搜";
pub const DEFAULT_SUBTITLE: &str = "每15分钟更新";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextMessage {
    pub msgtype: String,
    pub at: At,
    pub text: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct At {
    pub at_mobiles: Vec<String>,
    pub at_user_ids: Vec<String>,
    pub is_at_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub content: String,
}

/// Renders the message body: timestamp, title, subtitle, then one
/// description per line.
#[must_use]
pub fn build_content(
    timestamp: NaiveDateTime,
    title: &str,
    subtitle: &str,
    items: &[String],
) -> String {
    format!(
        "{}\n{title}\n{subtitle}\n\n{}\n\n",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        items.join("\n")
    )
}

#[must_use]
pub fn build_payload(content: String, at: &AtTargets) -> TextMessage {
    TextMessage {
        msgtype: "text".to_owned(),
        at: At {
            at_mobiles: at.mobiles.clone(),
            at_user_ids: at.user_ids.clone(),
            is_at_all: at.all,
        },
        text: Text { content },
    }
}
