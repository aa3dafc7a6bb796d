//! Detection of replies whose link to the parent post was lost in the export.
//!
//! Mastodon renders a reply by opening the first paragraph with a mention of
//! the addressee. When `inReplyTo` is empty but the text still starts that way,
//! the post was most likely a reply to a status or account that has since
//! disappeared. This depends on one particular rendering of mention markup and
//! is a best-effort signal only.

use serde::Serialize;

const PARAGRAPH_CLOSE: &str = "</p>";
const PARAGRAPH_OPEN_LEN: usize = 3;
const HCARD_PREFIX: &str = "<span class=\"h-card\"><a href=";
const MENTION_MARKER: &str = "class=\"u-url mention\">@<span>";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MentionOutcome {
    NotAMention,
    /// Plain-text `@handle`; only the handle survives.
    BareMention(String),
    /// Linked h-card mention; the profile url is recoverable.
    LinkedMention(String),
}

impl MentionOutcome {
    pub fn is_mention(&self) -> bool {
        !matches!(self, MentionOutcome::NotAMention)
    }
}

pub fn detect_mention(content: &str) -> MentionOutcome {
    let first_paragraph = content.split(PARAGRAPH_CLOSE).next().unwrap_or_default();
    let fragment = first_paragraph
        .char_indices()
        .nth(PARAGRAPH_OPEN_LEN)
        .map(|(i, _)| &first_paragraph[i..])
        .unwrap_or_default();

    if fragment.starts_with('@') {
        let handle = fragment.split_whitespace().next().unwrap_or(fragment);
        return MentionOutcome::BareMention(handle.to_string());
    }

    if fragment.starts_with(HCARD_PREFIX) && fragment.contains(MENTION_MARKER) {
        // <span class="h-card"><a href="URL" ...: the url is the fourth quote-delimited piece
        if let Some(url) = fragment.split('"').nth(3) {
            return MentionOutcome::LinkedMention(url.to_string());
        }
    }

    MentionOutcome::NotAMention
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_mention() {
        assert_eq!(
            detect_mention("<p>@someone hi</p>"),
            MentionOutcome::BareMention("@someone".to_string())
        );
    }

    #[test]
    fn test_linked_mention() {
        let content = concat!(
            "<p><span class=\"h-card\"><a href=\"https://else.where/@bob\" ",
            "class=\"u-url mention\">@<span>bob</span></a></span> see you</p><p>later</p>"
        );
        assert_eq!(
            detect_mention(content),
            MentionOutcome::LinkedMention("https://else.where/@bob".to_string())
        );
    }

    #[test]
    fn test_hcard_without_mention_class_is_not_a_mention() {
        let content = "<p><span class=\"h-card\"><a href=\"https://x/@y\">y</a></span></p>";
        assert_eq!(detect_mention(content), MentionOutcome::NotAMention);
    }

    #[test]
    fn test_mention_later_in_text_is_not_a_mention() {
        assert_eq!(detect_mention("<p>hi @someone</p>"), MentionOutcome::NotAMention);
        assert_eq!(detect_mention("<p>hi</p><p>@someone</p>"), MentionOutcome::NotAMention);
    }

    #[test]
    fn test_short_and_empty_content() {
        assert_eq!(detect_mention(""), MentionOutcome::NotAMention);
        assert_eq!(detect_mention("<p>"), MentionOutcome::NotAMention);
        assert_eq!(detect_mention("ab"), MentionOutcome::NotAMention);
    }

    #[test]
    fn test_detection_is_repeatable() {
        let content = "<p>@someone hi</p>";
        assert_eq!(detect_mention(content), detect_mention(content));
    }
}
