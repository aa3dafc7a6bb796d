pub mod text;

use clap::ValueEnum;

use crate::analysis::ArchiveSummary;
use crate::error::Result;

pub use text::{format_import, format_probe, format_text, RankedSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render_summary(summary: &ArchiveSummary, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(summary)?,
        OutputFormat::Text => format_text(summary),
    })
}
