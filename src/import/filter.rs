use serde::Serialize;

use crate::analysis::{Classification, PostKind};
use crate::config::ImportConfig;
use crate::models::{Record, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImportReason {
    TagIncluded,
    Public,
    FollowersOnly,
    ReplyToSelf,
}

impl std::fmt::Display for ImportReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportReason::TagIncluded => write!(f, "carries an included hashtag"),
            ImportReason::Public => write!(f, "public"),
            ImportReason::FollowersOnly => write!(f, "followers only"),
            ImportReason::ReplyToSelf => write!(f, "reply to own post"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkipReason {
    Boost,
    Orphaned,
    NotIncluded,
    ExcludedByTag,
    FollowersOnlyDisabled,
    Direct,
    Reply,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Boost => write!(f, "boost"),
            SkipReason::Orphaned => write!(f, "(probably) orphaned reply"),
            SkipReason::NotIncluded => write!(f, "no included hashtag"),
            SkipReason::ExcludedByTag => write!(f, "excluded by hashtag"),
            SkipReason::FollowersOnlyDisabled => write!(f, "followers only (not enabled)"),
            SkipReason::Direct => write!(f, "direct message"),
            SkipReason::Reply => write!(f, "reply"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Import(ImportReason),
    Skip(SkipReason),
}

/// Decides which records become site posts.
///
/// A non-empty include list takes precedence over everything except the
/// orphan check: the exclude list and the visibility rules are then ignored.
pub struct ImportFilter<'a> {
    config: &'a ImportConfig,
    owner_id: &'a str,
}

impl<'a> ImportFilter<'a> {
    pub fn new(config: &'a ImportConfig, owner_id: &'a str) -> Self {
        if !config.tags.include.is_empty() && !config.tags.exclude.is_empty() {
            tracing::warn!(
                "Both include and exclude hashtags are set; only the include list is applied"
            );
        }
        Self { config, owner_id }
    }

    pub fn select(&self, record: &Record, c: &Classification) -> Selection {
        if c.kind == PostKind::Boost {
            return Selection::Skip(SkipReason::Boost);
        }
        if c.is_orphan() {
            return Selection::Skip(SkipReason::Orphaned);
        }

        let tags = &self.config.tags;
        if !tags.include.is_empty() {
            return if record.has_tag_in(&tags.include) {
                Selection::Import(ImportReason::TagIncluded)
            } else {
                Selection::Skip(SkipReason::NotIncluded)
            };
        }
        if !tags.exclude.is_empty() && record.has_tag_in(&tags.exclude) {
            return Selection::Skip(SkipReason::ExcludedByTag);
        }

        let visible = match c.visibility {
            Visibility::Public => Ok(ImportReason::Public),
            Visibility::FollowersOnly if self.config.followers_only => {
                Ok(ImportReason::FollowersOnly)
            }
            Visibility::FollowersOnly => Err(SkipReason::FollowersOnlyDisabled),
            Visibility::Direct => Err(SkipReason::Direct),
        };

        match (c.kind, visible) {
            (_, Err(reason)) => Selection::Skip(reason),
            (PostKind::Reply, Ok(_)) => {
                if self.config.replytoself && c.reply_author.as_deref() == Some(self.owner_id) {
                    Selection::Import(ImportReason::ReplyToSelf)
                } else {
                    Selection::Skip(SkipReason::Reply)
                }
            }
            (_, Ok(reason)) => Selection::Import(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::tests::record;
    use crate::analysis::classify;
    use crate::models::RecordKind;

    const OWNER: &str = "https://instance/users/me";

    fn select(config: &ImportConfig, record: &Record) -> Selection {
        ImportFilter::new(config, OWNER).select(record, &classify(record))
    }

    fn tagged(visibility: Visibility, tags: &[&str]) -> Record {
        let mut r = record(RecordKind::Origin, visibility, None, "<p>look</p>");
        r.hashtags = tags.iter().map(|t| t.to_string()).collect();
        r
    }

    #[test]
    fn test_include_tag_overrides_visibility() {
        let mut config = ImportConfig::default();
        config.tags.include = vec!["art".to_string()];

        let direct = tagged(Visibility::Direct, &["#art"]);
        assert_eq!(select(&config, &direct), Selection::Import(ImportReason::TagIncluded));

        let untagged = tagged(Visibility::Public, &["#food"]);
        assert_eq!(select(&config, &untagged), Selection::Skip(SkipReason::NotIncluded));
    }

    #[test]
    fn test_include_takes_precedence_over_exclude() {
        let mut config = ImportConfig::default();
        config.tags.include = vec!["art".to_string()];
        config.tags.exclude = vec!["art".to_string()];

        let post = tagged(Visibility::Public, &["#art"]);
        assert_eq!(select(&config, &post), Selection::Import(ImportReason::TagIncluded));
    }

    #[test]
    fn test_followers_only_needs_config() {
        let config = ImportConfig::default();
        let post = tagged(Visibility::FollowersOnly, &[]);
        assert_eq!(select(&config, &post), Selection::Skip(SkipReason::FollowersOnlyDisabled));

        let config = ImportConfig {
            followers_only: true,
            ..Default::default()
        };
        assert_eq!(select(&config, &post), Selection::Import(ImportReason::FollowersOnly));
    }

    #[test]
    fn test_exclude_tag_vetoes_public_post() {
        let mut config = ImportConfig::default();
        config.tags.exclude = vec!["private".to_string()];

        assert_eq!(
            select(&config, &tagged(Visibility::Public, &["#Private", "#private"])),
            Selection::Skip(SkipReason::ExcludedByTag)
        );
        assert_eq!(
            select(&config, &tagged(Visibility::Public, &["#Private"])),
            Selection::Import(ImportReason::Public)
        );
    }

    #[test]
    fn test_orphans_are_never_imported() {
        let mut config = ImportConfig::default();
        config.tags.include = vec!["art".to_string()];

        let mut orphan = record(RecordKind::Origin, Visibility::Public, None, "<p>@someone #art</p>");
        orphan.hashtags = vec!["#art".to_string()];
        assert_eq!(select(&config, &orphan), Selection::Skip(SkipReason::Orphaned));
    }

    #[test]
    fn test_replies_to_self() {
        let own = record(
            RecordKind::Origin,
            Visibility::Public,
            Some("https://instance/users/me/statuses/7"),
            "<p>and another thing</p>",
        );
        let foreign = record(
            RecordKind::Origin,
            Visibility::Public,
            Some("https://else.where/users/bob/statuses/7"),
            "<p>@bob sure</p>",
        );

        let config = ImportConfig::default();
        assert_eq!(select(&config, &own), Selection::Skip(SkipReason::Reply));

        let config = ImportConfig {
            replytoself: true,
            ..Default::default()
        };
        assert_eq!(select(&config, &own), Selection::Import(ImportReason::ReplyToSelf));
        assert_eq!(select(&config, &foreign), Selection::Skip(SkipReason::Reply));
    }

    #[test]
    fn test_boosts_and_direct_messages_are_skipped() {
        let config = ImportConfig::default();
        let boost = record(RecordKind::Boost, Visibility::Public, None, "");
        assert_eq!(select(&config, &boost), Selection::Skip(SkipReason::Boost));
        assert_eq!(
            select(&config, &tagged(Visibility::Direct, &[])),
            Selection::Skip(SkipReason::Direct)
        );
    }
}
