mod analytics;
mod event;
mod mention;
mod topic;

pub use analytics::*;
pub use event::*;
pub use mention::*;
pub use topic::*;
