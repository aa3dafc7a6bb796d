use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{ActorDocument, OrderedCollection};

pub const OUTBOX_FILE: &str = "outbox.json";
pub const LIKES_FILE: &str = "likes.json";
pub const ACTOR_FILE: &str = "actor.json";
pub const MEDIA_DIR: &str = "media_attachments";

/// An extracted archive folder on disk.
#[derive(Debug, Clone)]
pub struct ArchiveDir {
    root: PathBuf,
}

impl ArchiveDir {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn load_outbox(&self) -> Result<Vec<serde_json::Value>> {
        let outbox: OrderedCollection = self.read_json(OUTBOX_FILE)?;
        tracing::info!("Loaded {} outbox items", outbox.ordered_items.len());
        Ok(outbox.ordered_items)
    }

    /// Liked object ids. Entries that are not plain strings are dropped.
    pub fn load_likes(&self) -> Result<Vec<String>> {
        let likes: OrderedCollection = self.read_json(LIKES_FILE)?;
        let total = likes.ordered_items.len();
        let ids: Vec<String> = likes
            .ordered_items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        if ids.len() < total {
            tracing::debug!("Ignored {} non-string like entries", total - ids.len());
        }
        Ok(ids)
    }

    pub fn load_actor(&self) -> Result<ActorDocument> {
        self.read_json(ACTOR_FILE)
    }

    pub fn media_files_dir(&self) -> PathBuf {
        self.root.join(MEDIA_DIR).join("files")
    }

    /// Maps an attachment url (`/media_attachments/files/...`) onto the archive folder.
    pub fn resolve_media(&self, url: &str) -> PathBuf {
        url.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(Error::ArchiveFileNotFound(path));
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_outbox_is_fatal() {
        let archive = ArchiveDir::new("/nonexistent/archive");
        match archive.load_outbox() {
            Err(Error::ArchiveFileNotFound(path)) => {
                assert!(path.ends_with(OUTBOX_FILE));
            }
            other => panic!("expected ArchiveFileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_media() {
        let archive = ArchiveDir::new("/data/archive");
        assert_eq!(
            archive.resolve_media("/media_attachments/files/1/2/original/a.png"),
            PathBuf::from("/data/archive/media_attachments/files/1/2/original/a.png")
        );
    }
}
