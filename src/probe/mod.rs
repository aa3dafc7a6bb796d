pub mod prober;
pub mod checker;

pub use prober::{HttpProber, ProbeOutcome, ProfileProber};
pub use checker::{check_profiles, ProbeResult, ProbeSummary};
