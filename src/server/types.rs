use serde::{Deserialize, Serialize};
use crate::core::stats::CorpusStats;
use crate::query::cache::CacheStats;

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTermsRequest {
    pub raw_terms: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RankRequest {
    pub query: String,
    pub limit: Option<usize>,
}

/// Body of `GET /api/stats`: corpus fields at the top level plus the result
/// cache counters.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub corpus: CorpusStats,
    pub cache: CacheStats,
    pub cache_enabled: bool,
    pub cache_hit_rate: f64,
}
