use std::cmp::Ordering;
use serde::{Serialize, Deserialize};

/// Document with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub score: f64,
}

impl SearchResult {
    pub fn new(file_name: impl Into<String>, score: f64) -> Self {
        SearchResult {
            file_name: file_name.into(),
            score,
        }
    }

    /// Score descending, then name ascending.
    pub fn rank_order(a: &SearchResult, b: &SearchResult) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.file_name.cmp(&b.file_name))
    }
}

/// Ranked results container
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResults {
    pub hits: Vec<SearchResult>,
    pub total_hits: usize,     // before any limit was applied
    pub max_score: f64,
    pub took_ms: u64,
}

impl RankedResults {
    pub fn new(mut hits: Vec<SearchResult>, limit: Option<usize>, took_ms: u64) -> Self {
        let total_hits = hits.len();
        let max_score = hits.first().map(|hit| hit.score).unwrap_or(0.0);

        if let Some(limit) = limit {
            hits.truncate(limit);
        }

        RankedResults {
            hits,
            total_hits,
            max_score,
            took_ms,
        }
    }
}
