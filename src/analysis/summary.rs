use serde::Serialize;

use crate::analysis::classifier::{classify, Classification, PostKind};
use crate::analysis::frequency::FrequencyTable;
use crate::analysis::mention::MentionOutcome;
use crate::archive::{media_census, parse_records, ArchiveDir, LikesSummary, MediaType};
use crate::error::Result;
use crate::models::{Record, Visibility};

/// Aggregated classifications of the outbox.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OutboxSummary {
    pub total_items: usize,
    pub skipped: usize,
    pub kinds: FrequencyTable<PostKind>,
    pub visibility: FrequencyTable<Visibility>,
    pub boosted_users: FrequencyTable<String>,
    pub replied_profiles: FrequencyTable<String>,
    pub vanished_users: FrequencyTable<String>,
    pub broken_conversations: FrequencyTable<String>,
    pub years: FrequencyTable<i32>,
    pub hashtags: FrequencyTable<String>,
    pub tagged_posts: usize,
    pub orphans: usize,
}

impl OutboxSummary {
    pub fn from_records(records: &[Record], skipped: usize) -> Self {
        let mut summary = Self {
            total_items: records.len() + skipped,
            skipped,
            ..Default::default()
        };
        for record in records {
            summary.add(&classify(record));
        }
        summary
    }

    pub fn add(&mut self, c: &Classification) {
        self.kinds.add(c.kind);
        self.visibility.add(c.visibility);
        self.years.add(c.year);

        if let Some(target) = &c.boost_target {
            self.boosted_users.add(target.clone());
        }
        if let Some(author) = &c.reply_author {
            self.replied_profiles.add(author.clone());
        }

        match &c.mention {
            MentionOutcome::BareMention(handle) => self.vanished_users.add(handle.clone()),
            MentionOutcome::LinkedMention(url) => self.broken_conversations.add(url.clone()),
            MentionOutcome::NotAMention => {}
        }
        if c.is_orphan() {
            self.orphans += 1;
        }

        if !c.hashtags.is_empty() {
            self.tagged_posts += 1;
        }
        for tag in &c.hashtags {
            self.hashtags.add(tag.clone());
        }
    }

    pub fn parsed(&self) -> usize {
        self.total_items - self.skipped
    }
}

/// Everything the statistics report shows about one archive.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveSummary {
    pub outbox: OutboxSummary,
    pub likes: LikesSummary,
    pub media: FrequencyTable<MediaType>,
}

impl ArchiveSummary {
    pub fn collect(archive: &ArchiveDir) -> Result<Self> {
        let items = archive.load_outbox()?;
        let likes = archive.load_likes()?;

        let (records, skipped) = parse_records(&items);
        if skipped > 0 {
            tracing::info!("Skipped {} malformed outbox items", skipped);
        }

        Ok(Self {
            outbox: OutboxSummary::from_records(&records, skipped),
            likes: LikesSummary::from_ids(&likes),
            media: media_census(&archive.media_files_dir()),
        })
    }
}
