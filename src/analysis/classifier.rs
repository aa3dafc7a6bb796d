use serde::Serialize;

use crate::analysis::mention::{detect_mention, MentionOutcome};
use crate::models::{Record, RecordKind, Visibility};

const PUBLIC_MARKER: &str = "#Public";
const FOLLOWERS_MARKER: &str = "/followers";
const STATUS_SEGMENT: &str = "/statuses";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum PostKind {
    Origin,
    Reply,
    Boost,
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostKind::Origin => write!(f, "original"),
            PostKind::Reply => write!(f, "reply"),
            PostKind::Boost => write!(f, "boost"),
        }
    }
}

/// Derived view of a [`Record`]. Never written back onto the record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Classification {
    pub kind: PostKind,
    pub visibility: Visibility,
    /// Replied-to account, taken from the parent status url.
    pub reply_author: Option<String>,
    pub boost_target: Option<String>,
    pub year: i32,
    pub hashtags: Vec<String>,
    /// Only computed for origin posts; everything else is `NotAMention`.
    pub mention: MentionOutcome,
}

impl Classification {
    pub fn is_orphan(&self) -> bool {
        self.kind == PostKind::Origin && self.mention.is_mention()
    }
}

/// Visibility from the primary recipient list. Only the first entry counts;
/// an empty list yields `None`.
pub fn classify_visibility(recipients: &[String]) -> Option<Visibility> {
    let first = recipients.first()?;
    Some(if first.ends_with(PUBLIC_MARKER) {
        Visibility::Public
    } else if first.ends_with(FOLLOWERS_MARKER) {
        Visibility::FollowersOnly
    } else {
        Visibility::Direct
    })
}

/// Account part of a status url: everything before `/statuses`.
pub fn reply_author(status_url: &str) -> &str {
    status_url.split(STATUS_SEGMENT).next().unwrap_or(status_url)
}

pub fn classify(record: &Record) -> Classification {
    let (kind, reply_author, boost_target) = match (record.kind, &record.reply_target) {
        (RecordKind::Boost, _) => (PostKind::Boost, None, Some(record.author_or_target.clone())),
        (RecordKind::Origin, Some(target)) => {
            (PostKind::Reply, Some(reply_author(target).to_string()), None)
        }
        (RecordKind::Origin, None) => (PostKind::Origin, None, None),
    };

    let mention = if kind == PostKind::Origin {
        detect_mention(&record.content)
    } else {
        MentionOutcome::NotAMention
    };

    Classification {
        kind,
        visibility: record.visibility,
        reply_author,
        boost_target,
        year: record.year(),
        hashtags: record.hashtags.clone(),
        mention,
    }
}
