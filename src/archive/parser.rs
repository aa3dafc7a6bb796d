use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::analysis::classifier::classify_visibility;
use crate::models::{Activity, ActivityObject, Attachment, Record, RecordKind};

/// Why a single outbox item was left out of the pass.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("unexpected record shape: {0}")]
    Shape(String),

    #[error("unsupported activity type: {0}")]
    UnsupportedType(String),

    #[error("empty recipient list")]
    NoRecipients,

    #[error("boost without a target account")]
    NoBoostTarget,

    #[error("invalid publishing date: {0}")]
    InvalidDate(String),
}

pub fn parse_record(value: &serde_json::Value) -> Result<Record, RecordError> {
    let activity =
        Activity::deserialize(value).map_err(|e| RecordError::Shape(e.to_string()))?;

    let published_at = DateTime::parse_from_rfc3339(&activity.published)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| RecordError::InvalidDate(activity.published.clone()))?;

    match (activity.activity_type.as_str(), activity.object) {
        ("Announce", ActivityObject::Reference(boosted)) => {
            let target = activity
                .cc
                .first()
                .cloned()
                .ok_or(RecordError::NoBoostTarget)?;
            let visibility =
                classify_visibility(&activity.to).ok_or(RecordError::NoRecipients)?;

            Ok(Record {
                id: boosted,
                kind: RecordKind::Boost,
                visibility,
                reply_target: None,
                published_at,
                hashtags: Vec::new(),
                attachments: Vec::new(),
                content: String::new(),
                author_or_target: target,
            })
        }
        ("Create", ActivityObject::Note(note)) => {
            let visibility = classify_visibility(&note.to).ok_or(RecordError::NoRecipients)?;

            let hashtags = note
                .tag
                .into_iter()
                .filter(|t| t.tag_type == "Hashtag")
                .map(|t| t.name)
                .collect();

            let attachments = note
                .attachment
                .into_iter()
                .map(|a| Attachment {
                    media_kind: a.media_type.split('/').next().unwrap_or_default().to_string(),
                    url: a.url,
                    description: a.name.filter(|d| !d.trim().is_empty()),
                })
                .collect();

            Ok(Record {
                id: note.id,
                kind: RecordKind::Origin,
                visibility,
                reply_target: note.in_reply_to,
                published_at,
                hashtags,
                attachments,
                content: note.content,
                author_or_target: String::new(),
            })
        }
        (other, _) => Err(RecordError::UnsupportedType(other.to_string())),
    }
}

/// Parses every item, skipping malformed ones. Returns the records in export
/// order together with the number of skipped items.
pub fn parse_records(items: &[serde_json::Value]) -> (Vec<Record>, usize) {
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for (index, item) in items.iter().enumerate() {
        match parse_record(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::debug!("Skipping outbox item {}: {}", index, e);
                skipped += 1;
            }
        }
    }

    (records, skipped)
}
