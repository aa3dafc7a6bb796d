use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A post written by the account owner (`Create`).
    Origin,
    /// A reshare of somebody else's post (`Announce`).
    Boost,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    FollowersOnly,
    Direct,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::FollowersOnly => write!(f, "followers only"),
            Visibility::Direct => write!(f, "direct message"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    /// Leading part of the MIME type: `image`, `video`, `audio`, ...
    pub media_kind: String,
    /// Path inside the archive, e.g. `/media_attachments/files/.../x.png`.
    pub url: String,
    pub description: Option<String>,
}

/// One parsed outbox item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Status id for posts, boosted status url for boosts.
    pub id: String,
    pub kind: RecordKind,
    pub visibility: Visibility,
    /// Raw `inReplyTo` url of the parent status.
    pub reply_target: Option<String>,
    pub published_at: DateTime<Utc>,
    /// Hashtag names in order of appearance, with their leading `#`.
    pub hashtags: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub content: String,
    /// Boosted account for boosts; empty for posts.
    pub author_or_target: String,
}

impl Record {
    pub fn year(&self) -> i32 {
        self.published_at.year()
    }

    /// Hashtags without the leading `#`, as used in tag filters and post metadata.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.hashtags
            .iter()
            .map(|tag| tag.strip_prefix('#').unwrap_or(tag))
    }

    pub fn has_tag_in(&self, tags: &[String]) -> bool {
        self.tag_names().any(|name| tags.iter().any(|t| t == name))
    }
}
