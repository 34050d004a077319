//! v1 API Data Transfer Objects.
//!
//! Wire formats for requests and responses that have no direct domain model.
//! Domain types that are already serializable (`Mention`, `MentionsPage`,
//! `Analytics`) are returned as-is.

pub mod keywords;
pub mod mentions;
pub mod simulator;

pub use keywords::*;
pub use mentions::*;
pub use simulator::*;
