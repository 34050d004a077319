use std::collections::HashMap;

use crate::intelligence::utils::{round_to, tokenize};
use crate::models::SentimentLabel;

/// Fixed word weights. Unlisted tokens contribute nothing.
const LEXICON: &[(&str, i32)] = &[
    ("love", 2),
    ("great", 2),
    ("awesome", 2),
    ("amazing", 3),
    ("good", 1),
    ("nice", 1),
    ("happy", 1),
    ("like", 1),
    ("excellent", 3),
    ("bad", -2),
    ("terrible", -3),
    ("hate", -3),
    ("awful", -3),
    ("disappointed", -2),
    ("issue", -1),
    ("problem", -2),
    ("bug", -2),
    ("stuck", -1),
    ("slow", -1),
    ("urgent", -1),
    ("outage", -3),
    ("angry", -2),
    ("frustrated", -2),
    ("fixed", 1),
    ("helpful", 2),
];

/// Raw sums are clamped to `[-MAX_RAW, MAX_RAW]` and divided by it.
const MAX_RAW: i32 = 6;

const POSITIVE_THRESHOLD: f64 = 0.4;
const NEGATIVE_THRESHOLD: f64 = -0.4;

/// Bag-of-words sentiment scorer over a small fixed lexicon.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    weights: HashMap<&'static str, i32>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            weights: LEXICON.iter().copied().collect(),
        }
    }

    /// Normalized sentiment in `[-1.0, 1.0]`, rounded to 3 decimals.
    pub fn score(&self, text: &str) -> f64 {
        let raw: i32 = tokenize(text)
            .iter()
            .filter_map(|token| self.weights.get(token.as_str()))
            .sum();
        let clamped = raw.clamp(-MAX_RAW, MAX_RAW);
        round_to(f64::from(clamped) / f64::from(MAX_RAW), 3)
    }

    /// Coarse label for a score. Pure function of the score alone.
    pub fn label(score: f64) -> SentimentLabel {
        if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn analyze(&self, text: &str) -> (f64, SentimentLabel) {
        let score = self.score(text);
        (score, Self::label(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = LexiconScorer::new();
        let (score, label) = scorer.analyze("Amazing features shipped, love it!");
        assert_eq!(score, 0.833);
        assert_eq!(label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_text_is_clamped() {
        let scorer = LexiconScorer::new();
        // outage(-3) + angry(-2) + frustrated(-2) = -7, clamped to -6
        let (score, label) = scorer.analyze("Major outage, customers are angry and frustrated");
        assert_eq!(score, -1.0);
        assert_eq!(label, SentimentLabel::Negative);
    }

    #[test]
    fn test_no_lexicon_match_is_neutral_zero() {
        let scorer = LexiconScorer::new();
        let (score, label) = scorer.analyze("The meeting is at 3pm");
        assert_eq!(score, 0.0);
        assert_eq!(label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.analyze(""), (0.0, SentimentLabel::Neutral));
    }

    #[test]
    fn test_mixed_weights_cancel() {
        let scorer = LexiconScorer::new();
        // fixed(+1) + bug(-2) + great(+2) = 1
        assert_eq!(scorer.score("Great, they fixed the bug"), 0.167);
    }

    #[test]
    fn test_scorer_is_contextless() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score("not good"), scorer.score("good"));
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(LexiconScorer::label(0.5), SentimentLabel::Positive);
        assert_eq!(LexiconScorer::label(0.4), SentimentLabel::Positive);
        assert_eq!(LexiconScorer::label(0.399), SentimentLabel::Neutral);
        assert_eq!(LexiconScorer::label(0.0), SentimentLabel::Neutral);
        assert_eq!(LexiconScorer::label(-0.4), SentimentLabel::Negative);
        assert_eq!(LexiconScorer::label(-0.5), SentimentLabel::Negative);
    }

    #[test]
    fn test_score_always_in_range() {
        let scorer = LexiconScorer::new();
        let texts = [
            "love love love love amazing excellent great",
            "hate hate terrible awful outage outage",
            "Support fixed my issue quickly, nice response time!",
            "#love @hate",
        ];
        for text in texts {
            let score = scorer.score(text);
            assert!((-1.0..=1.0).contains(&score), "{text} scored {score}");
            assert_eq!(score, scorer.score(text));
        }
    }
}
