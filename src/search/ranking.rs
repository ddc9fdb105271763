use rayon::prelude::*;
use tracing::debug;
use crate::analysis::analyzer::Analyzer;
use crate::core::types::Document;
use crate::scoring::scorer::{
    DocumentFrequencies, InverseDocumentFrequency, TermCounts, UnaryIdf,
};
use crate::search::results::SearchResult;
use crate::search::vocabulary::Vocabulary;
use crate::simd::operation::VectorOps;

/// Vector-space ranking over term-frequency vectors.
///
/// Every call rebuilds the vocabulary from the corpus it is handed, turns the
/// query and each document into a tf * idf vector over that vocabulary, and
/// keeps documents whose cosine similarity is strictly positive.
pub struct VectorSpaceRanker {
    analyzer: Analyzer,
    idf: Box<dyn InverseDocumentFrequency>,
    parallel_threshold: usize,
}

impl VectorSpaceRanker {
    pub fn new(idf: Box<dyn InverseDocumentFrequency>) -> Self {
        VectorSpaceRanker {
            analyzer: Analyzer::standard(),
            idf,
            parallel_threshold: usize::MAX,
        }
    }

    /// Score documents on the rayon pool once the corpus has at least
    /// `threshold` documents.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn idf_name(&self) -> &str {
        self.idf.name()
    }

    /// Results sorted by score descending, ties by name ascending.
    /// A query with no terms yields no results.
    pub fn rank(&self, query: &str, documents: &[Document]) -> Vec<SearchResult> {
        let query_terms = self.analyzer.terms(query);
        if query_terms.is_empty() {
            return Vec::new();
        }
        let query_refs: Vec<&str> = query_terms.iter().map(String::as_str).collect();

        let doc_counts: Vec<TermCounts<'_>> = documents
            .iter()
            .map(|doc| TermCounts::from_text(&doc.content))
            .collect();

        let vocabulary = Vocabulary::build(&doc_counts, &query_refs);

        let frequencies = if self.idf.requires_document_frequencies() {
            DocumentFrequencies::from_counts(&doc_counts)
        } else {
            DocumentFrequencies::without_terms(documents.len())
        };
        let weights: Vec<f64> = vocabulary
            .terms()
            .iter()
            .map(|term| self.idf.idf(term, &frequencies))
            .collect();

        // The query is scored as a document of its own.
        let query_doc = query_refs.join(" ");
        let query_vector = vocabulary.vectorize(&TermCounts::from_text(&query_doc), &weights);

        let mut results: Vec<SearchResult> = if documents.len() >= self.parallel_threshold {
            documents
                .par_iter()
                .zip(doc_counts.par_iter())
                .filter_map(|(doc, counts)| {
                    score_document(doc, counts, &vocabulary, &weights, &query_vector)
                })
                .collect()
        } else {
            documents
                .iter()
                .zip(doc_counts.iter())
                .filter_map(|(doc, counts)| {
                    score_document(doc, counts, &vocabulary, &weights, &query_vector)
                })
                .collect()
        };

        results.sort_by(SearchResult::rank_order);

        debug!(
            "Ranked {} documents over {} terms, {} kept",
            documents.len(),
            vocabulary.len(),
            results.len()
        );

        results
    }
}

impl Default for VectorSpaceRanker {
    fn default() -> Self {
        VectorSpaceRanker::new(Box::new(UnaryIdf))
    }
}

fn score_document(
    doc: &Document,
    counts: &TermCounts<'_>,
    vocabulary: &Vocabulary<'_>,
    weights: &[f64],
    query_vector: &[f64],
) -> Option<SearchResult> {
    let doc_vector = vocabulary.vectorize(counts, weights);
    let score = VectorOps::cosine_similarity(query_vector, &doc_vector);

    // no epsilon: anything above exactly zero is a hit
    (score > 0.0).then(|| SearchResult::new(doc.name.clone(), score))
}

/// Rank `documents` against `query` with constant IDF.
pub fn rank_by_similarity(query: &str, documents: &[Document]) -> Vec<SearchResult> {
    VectorSpaceRanker::default().rank(query, documents)
}
