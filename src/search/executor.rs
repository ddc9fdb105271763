use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use crate::core::config::Config;
use crate::core::corpus::{CorpusState, DocumentStore};
use crate::core::error::{Error, Result};
use crate::query::cache::{CacheStats, CachedResult, QueryCache, QueryKey, SearchMode};
use crate::query::matcher::BooleanMatcher;
use crate::query::parser::QueryParser;
use crate::search::results::RankedResults;
use crate::search::ranking::VectorSpaceRanker;

/// Runs queries against the shared corpus.
///
/// Holds the store lock for the whole engine call, checks the preconditions
/// the engines rely on, and memoizes results per corpus version.
pub struct QueryExecutor {
    store: Arc<DocumentStore>,
    parser: QueryParser,
    ranker: VectorSpaceRanker,
    cache: QueryCache,
    require_terms_for_boolean: bool,
}

impl QueryExecutor {
    pub fn new(store: Arc<DocumentStore>, config: &Config) -> Self {
        QueryExecutor {
            store,
            parser: QueryParser::new(),
            ranker: VectorSpaceRanker::new(config.idf.weighting())
                .with_parallel_threshold(config.parallel_threshold),
            cache: QueryCache::new(config.result_cache_size),
            require_terms_for_boolean: config.require_terms_for_boolean,
        }
    }

    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// Fail fast when `mode` cannot run against the current corpus.
    pub fn ensure_ready(&self, mode: SearchMode) -> Result<()> {
        let corpus = self.store.lock();
        self.check_preconditions(&corpus, mode)
    }

    fn check_preconditions(&self, corpus: &CorpusState, mode: SearchMode) -> Result<()> {
        if mode == SearchMode::Boolean && self.require_terms_for_boolean && corpus.terms().is_empty() {
            return Err(Error::no_terms());
        }
        if corpus.is_empty() {
            return Err(Error::no_documents());
        }
        Ok(())
    }

    /// Names of documents matching a boolean query, sorted ascending.
    pub fn evaluate_boolean(&self, query: &str) -> Result<BTreeSet<String>> {
        let start = Instant::now();
        let corpus = self.store.lock();
        self.check_preconditions(&corpus, SearchMode::Boolean)?;

        let key = QueryKey::new(SearchMode::Boolean, query, corpus.version());
        if let Some(CachedResult::Boolean(names)) = self.cache.get(&key) {
            debug!("Boolean cache hit for '{}'", key.query);
            return Ok(names);
        }

        let parsed = self.parser.parse(query);
        if parsed.is_empty() {
            debug!("Boolean query '{}' has no literals", key.query);
        }
        let names = BooleanMatcher::new(corpus.documents()).evaluate(&parsed);
        drop(corpus);

        info!(
            "Boolean search '{}': {} literals, {} hits in {}ms",
            key.query,
            parsed.literal_count(),
            names.len(),
            start.elapsed().as_millis()
        );

        self.cache.put(key, CachedResult::Boolean(names.clone()));
        Ok(names)
    }

    /// Documents ranked by cosine similarity, truncated to `limit` if given.
    pub fn rank(&self, query: &str, limit: Option<usize>) -> Result<RankedResults> {
        let start = Instant::now();
        let corpus = self.store.lock();
        self.check_preconditions(&corpus, SearchMode::Vector)?;

        let key = QueryKey::new(SearchMode::Vector, query, corpus.version());
        let hits = match self.cache.get(&key) {
            Some(CachedResult::Ranked(hits)) => {
                debug!("Ranking cache hit for '{}'", key.query);
                hits
            }
            _ => {
                let hits = self.ranker.rank(query, corpus.documents());
                self.cache.put(key.clone(), CachedResult::Ranked(hits.clone()));
                hits
            }
        };
        drop(corpus);

        let took_ms = start.elapsed().as_millis() as u64;
        let ranked = RankedResults::new(hits, limit, took_ms);
        info!(
            "Vector search '{}' ({} idf): {} hits, max score {:.4}, in {}ms",
            key.query,
            self.ranker.idf_name(),
            ranked.total_hits,
            ranked.max_score,
            took_ms
        );

        Ok(ranked)
    }

    /// Empty the corpus and drop every cached result.
    pub fn clear(&self) {
        self.store.clear();
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }
}
