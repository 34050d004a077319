pub mod cluster;
pub mod sentiment;
pub mod spike;
pub mod utils;
pub mod vector;

pub use cluster::TopicClusterer;
pub use sentiment::LexiconScorer;
pub use spike::{detect_spike, SpikeDetector};
pub use vector::{cosine_similarity, vectorize, TermVector};
