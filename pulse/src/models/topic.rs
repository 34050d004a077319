use serde::Serialize;

/// A group of recent mentions judged similar by term-frequency cosine
/// similarity. Recomputed from scratch for every query.
#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicCluster {
    pub id: String,
    /// Top shared terms, comma-joined, or `misc`.
    pub label: String,
    pub count: usize,
    /// Ids of the member mentions, in assignment order.
    pub items: Vec<String>,
}
