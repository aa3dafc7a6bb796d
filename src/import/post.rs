use crate::analysis::Classification;
use crate::config::ImportConfig;
use crate::import::content::{prepare_content, MediaPlacement};
use crate::models::{Owner, Record, Visibility};

/// One site post ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPost {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub tags: Vec<String>,
    pub category: String,
    pub link: String,
    pub content: String,
    pub media: Vec<MediaPlacement>,
}

impl PreparedPost {
    /// `index` is the position among the selected posts, `total` their number;
    /// both title and slug are the zero-padded index.
    pub fn new(
        index: usize,
        total: usize,
        record: &Record,
        classification: &Classification,
        config: &ImportConfig,
        owner: &Owner,
    ) -> Self {
        let width = total.to_string().len();
        let slug = format!("{:0width$}", index, width = width);

        let category = match classification.visibility {
            Visibility::Public => "public",
            Visibility::FollowersOnly => "followers only",
            Visibility::Direct => "",
        };

        let prepared = prepare_content(&record.content, &record.attachments, &owner.domain);

        let mut tags: Vec<String> = Vec::new();
        let names = record
            .tag_names()
            .map(str::to_string)
            .chain(record.attachments.iter().map(|a| a.media_kind.clone()));
        for name in names {
            if !tags.contains(&name) {
                tags.push(name);
            }
        }

        Self {
            title: slug.clone(),
            slug,
            date: record.published_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            tags,
            category: category.to_string(),
            link: if config.originalsource {
                record.id.clone()
            } else {
                String::new()
            },
            content: prepared.html,
            media: prepared.media,
        }
    }

    /// Metadata in the site generator's `.. key: value` format.
    pub fn metadata(&self) -> String {
        let mut meta = String::new();
        meta.push_str(&format!(".. title: {}\n", self.title));
        meta.push_str(&format!(".. slug: {}\n", self.slug));
        meta.push_str(&format!(".. date: {}\n", self.date));
        meta.push_str(&format!(".. tags: {}\n", self.tags.join(",")));
        meta.push_str(".. description: \n");
        meta.push_str(&format!(".. link: {}\n", self.link));
        meta.push_str(".. hidetitle: True\n");
        meta.push_str(&format!(".. category: {}\n", self.category));
        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::tests::record;
    use crate::analysis::classify;
    use crate::models::{Attachment, RecordKind};

    #[test]
    fn test_prepared_post_metadata() {
        let owner = Owner::from_actor_id("https://instance/users/me").unwrap();
        let mut r = record(RecordKind::Origin, Visibility::FollowersOnly, None, "<p>sunset #photo</p>");
        r.hashtags = vec!["#photo".to_string()];
        r.attachments = vec![
            Attachment {
                media_kind: "image".to_string(),
                url: "/media_attachments/files/1/a.jpg".to_string(),
                description: None,
            },
            Attachment {
                media_kind: "image".to_string(),
                url: "/media_attachments/files/1/b.jpg".to_string(),
                description: None,
            },
        ];

        let post = PreparedPost::new(7, 120, &r, &classify(&r), &ImportConfig::default(), &owner);
        assert_eq!(post.slug, "007");
        assert_eq!(post.title, "007");
        assert_eq!(post.tags, vec!["photo", "image"]);
        assert_eq!(post.category, "followers only");
        assert_eq!(post.link, "https://instance/users/me/statuses/1");

        let meta = post.metadata();
        assert!(meta.contains(".. date: 2022-05-01 12:00:00 UTC\n"));
        assert!(meta.contains(".. tags: photo,image\n"));
        assert!(meta.contains(".. category: followers only\n"));
    }

    #[test]
    fn test_link_omitted_without_originalsource() {
        let owner = Owner::from_actor_id("https://instance/users/me").unwrap();
        let r = record(RecordKind::Origin, Visibility::Public, None, "<p>x</p>");
        let config = ImportConfig {
            originalsource: false,
            ..Default::default()
        };
        let post = PreparedPost::new(0, 5, &r, &classify(&r), &config, &owner);
        assert_eq!(post.slug, "0");
        assert!(post.link.is_empty());
    }
}
