//! Wire shapes of the `container/getIndex` response.

use serde::Deserialize;

/// `{ ok, data: { cards: [...] } }` once `ok` has been checked.
#[derive(Debug, Deserialize)]
pub struct IndexResponse {
    pub data: IndexData,
}

#[derive(Debug, Deserialize)]
pub struct IndexData {
    pub cards: Vec<Card>,
}

/// A card holding the hot list. Entries stay raw so one malformed entry
/// does not sink the whole page.
#[derive(Debug, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub card_group: Vec<serde_json::Value>,
}
