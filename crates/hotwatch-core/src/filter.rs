//! Keyword matching over fetched hot items.

use crate::types::HotItem;

/// Returns the items whose description contains at least one keyword.
///
/// Matching is a case-sensitive substring test and input order is preserved.
/// Empty keywords are ignored, so an empty or blank keyword set matches
/// nothing.
#[must_use]
pub fn filter_by_keywords<'a>(items: &'a [HotItem], keywords: &[String]) -> Vec<&'a HotItem> {
    items
        .iter()
        .filter(|item| matches_any(&item.desc, keywords))
        .collect()
}

/// Same as [`filter_by_keywords`] but yields the owned descriptions.
#[must_use]
pub fn matching_descriptions(items: &[HotItem], keywords: &[String]) -> Vec<String> {
    filter_by_keywords(items, keywords)
        .into_iter()
        .map(|item| item.desc.clone())
        .collect()
}

fn matches_any(desc: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && desc.contains(keyword.as_str()))
}
