pub mod analytics;
pub mod events;
pub mod export;
pub(crate) mod health;
pub mod keywords;
pub mod mentions;
pub mod simulator;

pub use health::health_check;
