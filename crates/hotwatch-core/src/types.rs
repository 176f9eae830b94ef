use serde::Deserialize;

/// One entry of the Weibo realtime-rising card group.
///
/// Only `desc` drives any logic. The remaining fields are carried through as
/// raw JSON so an oddly typed passthrough value never drops an entry whose
/// `desc` is fine; unknown upstream fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HotItem {
    pub desc: String,
    /// Opaque heat/ranking id, usually a number.
    #[serde(default)]
    pub desc_extr: Option<serde_json::Value>,
    #[serde(default)]
    pub icon: Option<serde_json::Value>,
    #[serde(default)]
    pub scheme: Option<serde_json::Value>,
    #[serde(default)]
    pub pic: Option<serde_json::Value>,
    #[serde(default)]
    pub itemid: Option<serde_json::Value>,
}

impl HotItem {
    /// Builds an item carrying only a description.
    #[must_use]
    pub fn with_desc(desc: impl Into<String>) -> Self {
        Self {
            desc: desc.into(),
            desc_extr: None,
            icon: None,
            scheme: None,
            pic: None,
            itemid: None,
        }
    }
}
