use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::ArchiveDir;
use crate::error::Result;
use crate::import::content::{FILES_DIR, IMAGES_DIR};
use crate::import::post::PreparedPost;
use crate::import::site::SiteContext;

pub const POSTS_DIR: &str = "posts";
pub const CONF_FILE: &str = "conf.py";

/// Writes posts, metadata and media into the output site folder.
pub struct SiteWriter<'a> {
    archive: &'a ArchiveDir,
    output: PathBuf,
}

impl<'a> SiteWriter<'a> {
    pub fn new<P: AsRef<Path>>(archive: &'a ArchiveDir, output: P) -> Self {
        Self {
            archive,
            output: output.as_ref().to_path_buf(),
        }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.output.join(IMAGES_DIR)
    }

    pub fn create_layout(&self) -> Result<()> {
        for dir in [POSTS_DIR, IMAGES_DIR, FILES_DIR] {
            fs::create_dir_all(self.output.join(dir))?;
        }
        Ok(())
    }

    pub fn write_conf(&self, context: &SiteContext) -> Result<()> {
        fs::write(self.output.join(CONF_FILE), context.render_conf())?;
        Ok(())
    }

    /// Writes `<slug>.meta` and `<slug>.html` and copies the attachments.
    /// Returns how many attachments were missing from the archive.
    pub fn write_post(&self, post: &PreparedPost) -> Result<usize> {
        let posts = self.output.join(POSTS_DIR);
        fs::write(posts.join(format!("{}.meta", post.slug)), post.metadata())?;
        fs::write(posts.join(format!("{}.html", post.slug)), &post.content)?;

        let mut missing = 0;
        for media in &post.media {
            let source = self.archive.resolve_media(&media.source_url);
            let dest = self.output.join(media.folder).join(&media.file_name);
            if !source.is_file() {
                tracing::warn!(
                    "Attachment {} of post {} not found in archive",
                    source.display(),
                    post.slug
                );
                missing += 1;
                continue;
            }
            tracing::debug!("Copying {} to {}", source.display(), dest.display());
            fs::copy(&source, &dest)?;
        }

        Ok(missing)
    }
}
