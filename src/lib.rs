pub mod config;
pub mod error;
pub mod models;
pub mod archive;
pub mod analysis;
pub mod report;
pub mod probe;
pub mod import;

pub use config::{Config, ImportConfig, ProbeConfig};
pub use error::{Error, Result};
pub use archive::ArchiveDir;
pub use analysis::{classify, ArchiveSummary, Classification, FrequencyTable};
pub use probe::{HttpProber, ProfileProber};
pub use import::Importer;
