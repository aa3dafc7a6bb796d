use serde::Serialize;

use crate::analysis::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    Mastodon,
    Pixelfed,
    Pleroma,
    Hubzilla,
    PeerTube,
    Misskey,
    /// `tag:` / `urn:` ids of posts that no longer resolve.
    Vanished,
    Unknown(String),
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Mastodon => write!(f, "Mastodon"),
            Platform::Pixelfed => write!(f, "Pixelfed"),
            Platform::Pleroma => write!(f, "Pleroma"),
            Platform::Hubzilla => write!(f, "Hubzilla"),
            Platform::PeerTube => write!(f, "PeerTube"),
            Platform::Misskey => write!(f, "Misskey"),
            Platform::Vanished => write!(f, "unknown (vanished posts)"),
            Platform::Unknown(id) => write!(f, "unknown ({})", id),
        }
    }
}

/// Guesses the platform a liked object lives on from its url layout.
pub fn classify_like(id: &str) -> Platform {
    if id.starts_with("tag") || id.starts_with("urn") {
        return Platform::Vanished;
    }

    let patterns = [
        ("/users/", Platform::Mastodon),
        ("/p/", Platform::Pixelfed),
        ("/objects/", Platform::Pleroma),
        ("/item/", Platform::Hubzilla),
        ("/videos/", Platform::PeerTube),
        ("/notes/", Platform::Misskey),
    ];

    patterns
        .into_iter()
        .find(|(pattern, _)| id.contains(pattern))
        .map(|(_, platform)| platform)
        .unwrap_or_else(|| Platform::Unknown(id.to_string()))
}

/// Author part of a Mastodon status url.
pub fn mastodon_profile(id: &str) -> &str {
    id.split("/statuses").next().unwrap_or(id)
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LikesSummary {
    pub total: usize,
    pub platforms: FrequencyTable<Platform>,
    pub mastodon_profiles: FrequencyTable<String>,
}

impl LikesSummary {
    pub fn from_ids(ids: &[String]) -> Self {
        let mut summary = Self {
            total: ids.len(),
            ..Default::default()
        };

        for id in ids {
            let platform = classify_like(id);
            if platform == Platform::Mastodon {
                summary.mastodon_profiles.add(mastodon_profile(id).to_string());
            }
            summary.platforms.add(platform);
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_like() {
        assert_eq!(classify_like("https://pix.example/p/alice/123"), Platform::Pixelfed);
        assert_eq!(
            classify_like("https://m.example/users/bob/statuses/1"),
            Platform::Mastodon
        );
        assert_eq!(classify_like("https://pl.example/objects/abc"), Platform::Pleroma);
        assert_eq!(classify_like("https://hz.example/item/abc"), Platform::Hubzilla);
        assert_eq!(classify_like("https://pt.example/videos/watch/1"), Platform::PeerTube);
        assert_eq!(classify_like("https://mk.example/notes/8x"), Platform::Misskey);
        assert_eq!(classify_like("tag:gs.example,2019:noticeId=1"), Platform::Vanished);
        assert_eq!(
            classify_like("https://odd.example/thing"),
            Platform::Unknown("https://odd.example/thing".to_string())
        );
    }

    #[test]
    fn test_mastodon_likes_record_author_prefix() {
        let ids = vec![
            "https://m.example/users/bob/statuses/1".to_string(),
            "https://pix.example/p/alice/1".to_string(),
            "https://m.example/users/bob/statuses/2".to_string(),
        ];
        let summary = LikesSummary::from_ids(&ids);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.platforms.count(&Platform::Mastodon), 2);
        assert_eq!(summary.platforms.count(&Platform::Pixelfed), 1);
        assert_eq!(
            summary.mastodon_profiles.count(&"https://m.example/users/bob".to_string()),
            2
        );
    }
}
