use std::fmt::Display;
use std::hash::Hash;

use crate::analysis::{ArchiveSummary, FrequencyTable, OutboxSummary, PostKind};
use crate::import::{ImportReason, ImportReport};
use crate::models::Visibility;
use crate::probe::{ProbeResult, ProbeSummary};

pub const HLINE: &str = "\n********************************************************\n";

const BANNER: &str = "
┌──────────────────────────────┐
│   Mastodon archive summary   │
└──────────────────────────────┘
";

/// One "count, rank, render" block of the report.
pub struct RankedSection<'a> {
    pub title: &'a str,
    /// `None` lists every value.
    pub limit: Option<usize>,
    pub width: usize,
    /// Label of the trailing distinct-value count, if any.
    pub total_label: Option<&'a str>,
}

impl<'a> RankedSection<'a> {
    pub fn top(title: &'a str, limit: usize) -> Self {
        Self {
            title,
            limit: Some(limit),
            width: 4,
            total_label: None,
        }
    }

    pub fn all(title: &'a str, width: usize) -> Self {
        Self {
            title,
            limit: None,
            width,
            total_label: None,
        }
    }

    pub fn with_total(mut self, label: &'a str) -> Self {
        self.total_label = Some(label);
        self
    }

    pub fn heading(&self) -> String {
        match self.limit {
            Some(n) => format!("{} ({})", self.title, n),
            None => self.title.to_string(),
        }
    }

    pub fn render<K: Eq + Hash + Clone + Display>(&self, table: &FrequencyTable<K>) -> String {
        let heading = self.heading();
        let mut output = format!("{}\n{}\n", heading, "~".repeat(heading.chars().count()));

        let rows = match self.limit {
            Some(n) => table.top(n),
            None => table.ranked(),
        };
        for (value, count) in rows {
            output.push_str(&format!("{:>width$}: {}\n", count, value, width = self.width));
        }

        if let Some(label) = self.total_label {
            output.push_str(&format!("\n{}: {}\n", label, table.distinct()));
        }

        output
    }
}

pub fn format_text(summary: &ArchiveSummary) -> String {
    let outbox = &summary.outbox;
    let mut output = String::from(BANNER);

    output.push('\n');
    push_totals(&mut output, outbox);
    output.push_str(
        &RankedSection::top("most boosted users", 10)
            .with_total("boosted users (total)")
            .render(&outbox.boosted_users),
    );
    output.push_str(HLINE);
    push_post_counts(&mut output, outbox, "among them orphaned replies");

    output.push_str(
        &RankedSection::top("most replied profiles", 20)
            .with_total("replied users (total)")
            .render(&outbox.replied_profiles),
    );
    output.push('\n');
    output.push_str(
        &RankedSection::top("most replied profiles that are no longer available", 20)
            .with_total("replied users (total)")
            .render(&outbox.vanished_users),
    );
    output.push('\n');
    output.push_str(
        &RankedSection::top("profiles with broken conversations", 20)
            .with_total("replied users (total)")
            .render(&outbox.broken_conversations),
    );
    output.push_str(HLINE);

    output.push_str("publishing year\n~~~~~~~~~~~~~~~\n");
    for (year, count) in outbox.years.sorted_by_key() {
        output.push_str(&format!("{}: {:>5}\n", year, count));
    }
    output.push_str(HLINE);

    output.push_str(
        &RankedSection::top("popular hashtags", 25)
            .with_total("hashtags (total)")
            .render(&outbox.hashtags),
    );
    output.push_str(HLINE);

    output.push_str("likes\n~~~~~\n");
    output.push_str(&format!("total: {}\n", summary.likes.total));
    output.push_str(&RankedSection::all("liked posts by platform:", 6).render(&summary.likes.platforms));
    output.push_str(HLINE);

    output.push_str(
        &RankedSection::top("most liked Mastodon profiles", 50)
            .with_total("liked profiles (total)")
            .render(&summary.likes.mastodon_profiles),
    );
    output.push_str(HLINE);

    output.push_str(&format!(
        "number of media attachments: {}\n",
        summary.media.total()
    ));
    output.push_str(&RankedSection::all("media files by type:", 5).render(&summary.media));
    output.push_str(HLINE);

    output
}

fn push_totals(output: &mut String, outbox: &OutboxSummary) {
    output.push_str(&format!("total number of toots: {}\n", outbox.total_items));
    output.push_str(&format!(
        "among them boosts: {}\n",
        outbox.kinds.count(&PostKind::Boost)
    ));
    if outbox.skipped > 0 {
        output.push_str(&format!("skipped malformed entries: {}\n", outbox.skipped));
    }
    output.push_str(HLINE);
}

fn push_post_counts(output: &mut String, outbox: &OutboxSummary, orphan_label: &str) {
    output.push_str(&format!(
        "public posts: {}\n",
        outbox.visibility.count(&Visibility::Public)
    ));
    output.push_str(&format!(
        "followers only posts: {}\n",
        outbox.visibility.count(&Visibility::FollowersOnly)
    ));
    output.push_str(&format!(
        "direct messages: {}\n",
        outbox.visibility.count(&Visibility::Direct)
    ));
    output.push_str(HLINE);
    output.push_str(&format!(
        "original toots: {}\n",
        outbox.kinds.count(&PostKind::Origin)
    ));
    output.push_str(&format!("{}: {}\n", orphan_label, outbox.orphans));
    output.push_str(&format!("replies: {}\n", outbox.kinds.count(&PostKind::Reply)));
    output.push_str(&format!("posts with hashtags: {}\n", outbox.tagged_posts));
    output.push_str(HLINE);
}

pub fn format_import(report: &ImportReport) -> String {
    let mut output = String::from("Your Mastodon archive in numbers\n~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n");
    push_totals(&mut output, &report.outbox);
    push_post_counts(&mut output, &report.outbox, "among them (probably) orphaned replies");

    output.push_str(&format!(
        "number of toots to be imported: {}\n",
        report.imported_total()
    ));
    output.push_str(&format!(
        "among them posted 'followers only' (needs config): {}\n",
        report.imported.count(&ImportReason::FollowersOnly)
    ));
    output.push_str(&format!(
        "among them replies to own posts (needs config): {}\n",
        report.imported.count(&ImportReason::ReplyToSelf)
    ));
    output.push_str(&format!(
        "among them selected by hashtag: {}\n",
        report.imported.count(&ImportReason::TagIncluded)
    ));
    output.push('\n');
    output.push_str(&RankedSection::all("not imported", 5).render(&report.skipped));

    if report.missing_media > 0 {
        output.push_str(&format!(
            "\nattachments missing from the archive: {}\n",
            report.missing_media
        ));
    }
    if let Some(watermark) = &report.watermark {
        output.push_str(&format!(
            "\nwatermarked images: {} ({} failed)\n",
            watermark.marked, watermark.failed
        ));
    }
    output.push_str(HLINE);

    output
}

pub fn format_probe(title: &str, results: &[ProbeResult]) -> String {
    let mut output = format!("{}\n{}\n", title, "~".repeat(title.chars().count()));
    for result in results {
        output.push_str(&format!("{} {}\n", result.url, result.outcome));
    }

    let summary = ProbeSummary::from_results(results);
    output.push_str(&format!(
        "number of different profiles checked: {} of which are:\n",
        summary.checked
    ));
    output.push_str(&format!("{} available\n", summary.available));
    output.push_str(&format!("{} currently not available\n", summary.unavailable));
    output.push_str(&format!("{} no more existing\n", summary.gone));
    if summary.other > 0 {
        output.push_str(&format!("{} other status\n", summary.other));
    }
    output.push_str(HLINE);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_section_render() {
        let table: FrequencyTable<String> = ["b", "a", "a", "c"]
            .into_iter()
            .map(str::to_string)
            .collect();
        let rendered = RankedSection::top("most used", 2)
            .with_total("used (total)")
            .render(&table);
        assert_eq!(
            rendered,
            "most used (2)\n~~~~~~~~~~~~~\n   2: a\n   1: b\n\nused (total): 3\n"
        );
    }

    #[test]
    fn test_unlimited_section_lists_everything() {
        let table: FrequencyTable<&str> = ["x", "y", "z"].into_iter().collect();
        let rendered = RankedSection::all("by type", 5).render(&table);
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains("    1: z\n"));
    }

    #[test]
    fn test_format_probe_buckets() {
        use crate::probe::ProbeOutcome;

        let results = vec![
            ProbeResult {
                url: "https://a/users/x".to_string(),
                outcome: ProbeOutcome::Status(200),
            },
            ProbeResult {
                url: "https://b/users/y".to_string(),
                outcome: ProbeOutcome::ConnectionError,
            },
        ];
        let text = format_probe("most replied profiles (50)", &results);
        assert!(text.contains("https://b/users/y connection error\n"));
        assert!(text.contains("1 available\n"));
        assert!(text.contains("1 currently not available\n"));
        assert!(text.contains("0 no more existing\n"));
        assert!(!text.contains("other status"));
    }

    #[test]
    fn test_format_text_on_empty_summary() {
        let summary = ArchiveSummary {
            outbox: Default::default(),
            likes: Default::default(),
            media: Default::default(),
        };
        let text = format_text(&summary);
        assert!(text.contains("total number of toots: 0"));
        assert!(text.contains("most boosted users (10)"));
        assert!(text.contains("hashtags (total): 0"));
        assert!(!text.contains("skipped malformed entries"));
    }
}
