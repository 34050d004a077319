use std::collections::HashMap;

use tracing::debug;

use crate::intelligence::utils::tokenize;
use crate::intelligence::vector::{cosine_similarity, vectorize, TermVector};
use crate::models::{Mention, TopicCluster};

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.32;
const LABEL_TERMS: usize = 4;
const FALLBACK_LABEL: &str = "misc";

struct Member {
    id: String,
    vector: TermVector,
}

/// One cluster under construction: its members plus the running combined
/// term weights in first-seen order.
#[derive(Default)]
struct ClusterAccumulator {
    members: Vec<Member>,
    combined: Vec<(String, u32)>,
    positions: HashMap<String, usize>,
}

impl ClusterAccumulator {
    fn average_similarity(&self, vector: &TermVector) -> f64 {
        let total: f64 = self
            .members
            .iter()
            .map(|member| cosine_similarity(vector, &member.vector))
            .sum();
        total / self.members.len() as f64
    }

    fn push(&mut self, id: String, tokens: &[String], vector: TermVector) {
        for token in tokens {
            match self.positions.get(token) {
                Some(&pos) => self.combined[pos].1 += 1,
                None => {
                    self.positions.insert(token.clone(), self.combined.len());
                    self.combined.push((token.clone(), 1));
                }
            }
        }
        self.members.push(Member { id, vector });
    }

    fn label(&self) -> String {
        let mut ranked: Vec<&(String, u32)> = self.combined.iter().collect();
        // stable: equal weights keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let top: Vec<&str> = ranked
            .into_iter()
            .take(LABEL_TERMS)
            .map(|(term, _)| term.as_str())
            .filter(|term| !term.is_empty())
            .collect();
        if top.is_empty() {
            FALLBACK_LABEL.to_string()
        } else {
            top.join(", ")
        }
    }

    fn finish(self, index: usize) -> TopicCluster {
        TopicCluster {
            id: format!("topic_{index}"),
            label: self.label(),
            count: self.members.len(),
            items: self.members.into_iter().map(|m| m.id).collect(),
        }
    }
}

/// Greedy single-pass clustering over a small batch of mentions.
///
/// Each mention joins the *first* existing cluster whose mean cosine
/// similarity to the mention exceeds the threshold, otherwise it starts a new
/// cluster. Input order therefore affects the outcome.
#[derive(Debug, Clone, Copy)]
pub struct TopicClusterer {
    threshold: f64,
}

impl Default for TopicClusterer {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl TopicClusterer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn cluster(&self, mentions: &[Mention]) -> Vec<TopicCluster> {
        if mentions.is_empty() {
            return Vec::new();
        }

        let mut clusters: Vec<ClusterAccumulator> = Vec::new();

        for mention in mentions {
            let tokens = tokenize(&mention.text);
            let vector = vectorize(&tokens);

            let target = clusters
                .iter()
                .position(|cluster| cluster.average_similarity(&vector) > self.threshold);

            match target {
                Some(idx) => clusters[idx].push(mention.id.clone(), &tokens, vector),
                None => {
                    let mut cluster = ClusterAccumulator::default();
                    cluster.push(mention.id.clone(), &tokens, vector);
                    clusters.push(cluster);
                }
            }
        }

        debug!(
            "Clustering complete - mentions={}, clusters={}, threshold={}",
            mentions.len(),
            clusters.len(),
            self.threshold
        );

        clusters
            .into_iter()
            .enumerate()
            .map(|(idx, cluster)| cluster.finish(idx))
            .collect()
    }
}
