pub mod content;
pub mod filter;
pub mod post;
pub mod site;
pub mod watermark;
pub mod writer;

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::{classify, FrequencyTable, OutboxSummary};
use crate::archive::{parse_records, ArchiveDir};
use crate::config::ImportConfig;
use crate::error::Result;
use crate::models::Owner;

pub use filter::{ImportFilter, ImportReason, Selection, SkipReason};
pub use post::PreparedPost;
pub use site::SiteContext;
pub use watermark::WatermarkReport;
pub use writer::SiteWriter;

#[derive(Debug, Clone)]
pub struct ImportReport {
    pub outbox: OutboxSummary,
    pub imported: FrequencyTable<ImportReason>,
    pub skipped: FrequencyTable<SkipReason>,
    pub missing_media: usize,
    pub watermark: Option<WatermarkReport>,
}

impl ImportReport {
    pub fn imported_total(&self) -> usize {
        self.imported.total()
    }
}

pub struct Importer {
    archive: ArchiveDir,
    output: PathBuf,
    config: ImportConfig,
}

impl Importer {
    pub fn new<P: AsRef<Path>>(archive: ArchiveDir, output: P, config: ImportConfig) -> Self {
        Self {
            archive,
            output: output.as_ref().to_path_buf(),
            config,
        }
    }

    pub fn run(&self) -> Result<ImportReport> {
        let items = self.archive.load_outbox()?;
        let actor = self.archive.load_actor()?;
        let owner = Owner::try_from(&actor)?;
        tracing::info!("Importing archive of {}", owner.handle());

        let (records, skipped_items) = parse_records(&items);
        let filter = ImportFilter::new(&self.config, &owner.id);

        let mut outbox = OutboxSummary {
            total_items: items.len(),
            skipped: skipped_items,
            ..Default::default()
        };
        let mut imported = FrequencyTable::new();
        let mut skipped = FrequencyTable::new();
        let mut selected = Vec::new();

        for record in &records {
            let classification = classify(record);
            outbox.add(&classification);
            match filter.select(record, &classification) {
                Selection::Import(reason) => {
                    imported.add(reason);
                    selected.push((record, classification));
                }
                Selection::Skip(reason) => skipped.add(reason),
            }
        }
        tracing::info!("Selected {} of {} records for import", selected.len(), records.len());

        let writer = SiteWriter::new(&self.archive, &self.output);
        writer.create_layout()?;
        writer.write_conf(&SiteContext::new(&self.config.site, &owner))?;

        let pb = ProgressBar::new(selected.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} posts")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut missing_media = 0;
        for (index, (record, classification)) in selected.iter().enumerate() {
            let post = PreparedPost::new(
                index,
                selected.len(),
                record,
                classification,
                &self.config,
                &owner,
            );
            missing_media += writer.write_post(&post)?;
            pb.inc(1);
        }
        pb.finish_and_clear();

        let watermark = if self.config.watermark {
            tracing::info!("Adding watermarks to images");
            Some(watermark::watermark_images(
                &writer.images_dir(),
                self.config.watermark_text(),
            )?)
        } else {
            None
        };

        Ok(ImportReport {
            outbox,
            imported,
            skipped,
            missing_media,
            watermark,
        })
    }
}
