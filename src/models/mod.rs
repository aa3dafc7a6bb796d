pub mod activity;
pub mod actor;
pub mod record;

pub use activity::*;
pub use actor::*;
pub use record::*;
