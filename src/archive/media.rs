use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::analysis::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Other(String),
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "Image"),
            MediaType::Video => write!(f, "Video"),
            MediaType::Audio => write!(f, "Audio"),
            MediaType::Other(ext) => write!(f, "{}", ext),
        }
    }
}

pub fn media_type_for(file_name: &str) -> MediaType {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" | "png" | "gif" => MediaType::Image,
        "mp4" | "webm" | "mov" => MediaType::Video,
        "mp3" | "m4a" | "wav" => MediaType::Audio,
        _ => MediaType::Other(ext),
    }
}

/// Counts the files below `dir` by media type. A missing folder counts as empty.
pub fn media_census(dir: &Path) -> FrequencyTable<MediaType> {
    let mut table = FrequencyTable::new();
    if !dir.is_dir() {
        tracing::debug!("No media folder at {}", dir.display());
        return table;
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                table.add(media_type_for(&entry.file_name().to_string_lossy()));
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("Skipping unreadable media entry: {}", e),
        }
    }

    table
}
