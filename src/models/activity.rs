use serde::{Deserialize, Serialize};

/// Top-level shape shared by `outbox.json` and `likes.json`.
///
/// Items stay as raw JSON so one malformed entry cannot fail the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedCollection {
    #[serde(default)]
    pub ordered_items: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub id: Option<String>,
    pub published: String,
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default)]
    pub cc: Vec<String>,
    pub object: ActivityObject,
}

/// Posts embed the full note; boosts only reference the boosted status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityObject {
    Note(Box<Note>),
    Reference(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub to: Vec<String>,
    pub in_reply_to: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tag: Vec<NoteTag>,
    #[serde(default)]
    pub attachment: Vec<NoteAttachment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteAttachment {
    pub media_type: String,
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}
