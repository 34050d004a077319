use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{MentionDraft, Platform};
use crate::services::clock::Clock;

pub const SAMPLE_TEXTS: &[&str] = &[
    "Loving the new RapidQuest update - it's awesome and fast!",
    "RapidQuest rollout caused a major outage, customers are angry and frustrated",
    "Anyone else seeing issues after the product launch? app is slow",
    "Great pricing on the new plan, looks competitive.",
    "I hate how the onboarding works - terrible UX.",
    "Support fixed my issue quickly, nice response time!",
    "New campaign looks amazing - great creatives!",
    "There is a bug in the signup flow, keeps failing for some users",
    "Release notes didn't mention the breaking change, disappointed",
    "Amazing features shipped in this update, love it!",
];

/// Probability that a generated mention is biased toward a tracked keyword.
const KEYWORD_BIAS: f64 = 0.75;

/// Produces candidate mentions. The keyword set is a hint for biasing
/// content; sources are free to ignore it.
pub trait MentionSource: Send {
    fn next_mention(&mut self, keywords: &[String]) -> MentionDraft;
}

/// Random mentions drawn from a fixed pool of sample texts.
pub struct SimulatedSource {
    rng: StdRng,
    clock: Arc<dyn Clock>,
}

impl SimulatedSource {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            clock,
        }
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            clock,
        }
    }

    fn bias_text(&mut self, text: &str, keywords: &[String]) -> String {
        if keywords.is_empty() || !self.rng.gen_bool(KEYWORD_BIAS) {
            return text.to_string();
        }
        let Some(keyword) = keywords.choose(&mut self.rng) else {
            return text.to_string();
        };
        if text.to_lowercase().contains(&keyword.to_lowercase()) {
            return text.to_string();
        }
        if self.rng.gen_bool(0.5) {
            format!("{keyword} - {text}")
        } else {
            format!("{text} #{keyword}")
        }
    }
}

impl MentionSource for SimulatedSource {
    fn next_mention(&mut self, keywords: &[String]) -> MentionDraft {
        let platform = Platform::ALL[self.rng.gen_range(0..Platform::ALL.len())];
        let base = SAMPLE_TEXTS[self.rng.gen_range(0..SAMPLE_TEXTS.len())];
        let text = self.bias_text(base, keywords);
        MentionDraft::new(platform, text, self.clock.now_millis())
    }
}
