pub mod loader;
pub mod parser;
pub mod likes;
pub mod media;

pub use loader::ArchiveDir;
pub use parser::{parse_record, parse_records, RecordError};
pub use likes::{classify_like, LikesSummary, Platform};
pub use media::{media_census, MediaType};
