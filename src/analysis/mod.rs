pub mod classifier;
pub mod frequency;
pub mod mention;
pub mod summary;

pub use classifier::{classify, classify_visibility, Classification, PostKind};
pub use frequency::FrequencyTable;
pub use mention::{detect_mention, MentionOutcome};
pub use summary::{ArchiveSummary, OutboxSummary};
