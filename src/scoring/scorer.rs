use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use crate::analysis::tokenizer::WhitespaceTokenizer;

/// Per-term occurrence counts of one tokenized text.
#[derive(Debug, Clone, Default)]
pub struct TermCounts<'a> {
    counts: HashMap<&'a str, usize>,
    total: usize,
}

impl<'a> TermCounts<'a> {
    pub fn from_text(text: &'a str) -> Self {
        let mut counts = HashMap::new();
        let mut total = 0;

        for term in WhitespaceTokenizer::terms(text) {
            *counts.entry(term).or_insert(0) += 1;
            total += 1;
        }

        TermCounts { counts, total }
    }

    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of terms in the text, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// occurrences / total terms, or 0.0 for a text with no terms.
    pub fn term_frequency(&self, term: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(term) as f64 / self.total as f64
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    pub fn distinct_terms(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.counts.keys().copied()
    }
}

/// Term frequency of `term` in an already lower-cased text.
pub fn term_frequency(term: &str, text: &str) -> f64 {
    TermCounts::from_text(text).term_frequency(term)
}

/// How many documents contain each term.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequencies {
    pub total_docs: usize,
    pub counts: HashMap<String, usize>,
}

impl DocumentFrequencies {
    /// Only the document count; every term reports a frequency of zero.
    pub fn without_terms(total_docs: usize) -> Self {
        DocumentFrequencies {
            total_docs,
            counts: HashMap::new(),
        }
    }

    pub fn from_counts(documents: &[TermCounts<'_>]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let distinct: HashSet<&str> = doc.distinct_terms().collect();
            for term in distinct {
                *counts.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        DocumentFrequencies {
            total_docs: documents.len(),
            counts,
        }
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }
}

/// Inverse document frequency weighting
pub trait InverseDocumentFrequency: Send + Sync {
    fn idf(&self, term: &str, frequencies: &DocumentFrequencies) -> f64;

    fn name(&self) -> &str;

    fn requires_document_frequencies(&self) -> bool {
        false
    }
}

/// Constant weight of 1.0, so ranking is driven by term frequency alone.
pub struct UnaryIdf;

impl InverseDocumentFrequency for UnaryIdf {
    fn idf(&self, _term: &str, _frequencies: &DocumentFrequencies) -> f64 {
        1.0
    }

    fn name(&self) -> &str {
        "unary"
    }
}

/// ln((1 + N) / (1 + df)) + 1
///
/// Stays positive for every term, including query terms absent from the corpus.
pub struct SmoothedIdf;

impl InverseDocumentFrequency for SmoothedIdf {
    fn idf(&self, term: &str, frequencies: &DocumentFrequencies) -> f64 {
        let total = frequencies.total_docs as f64;
        let df = frequencies.document_frequency(term) as f64;
        ((1.0 + total) / (1.0 + df)).ln() + 1.0
    }

    fn name(&self) -> &str {
        "smoothed"
    }

    fn requires_document_frequencies(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdfMode {
    #[default]
    Unary,
    Smoothed,
}

impl IdfMode {
    pub fn weighting(self) -> Box<dyn InverseDocumentFrequency> {
        match self {
            IdfMode::Unary => Box::new(UnaryIdf),
            IdfMode::Smoothed => Box::new(SmoothedIdf),
        }
    }
}

impl FromStr for IdfMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unary" => Ok(IdfMode::Unary),
            "smoothed" => Ok(IdfMode::Smoothed),
            other => Err(format!("unknown idf mode '{}' (expected unary or smoothed)", other)),
        }
    }
}

impl fmt::Display for IdfMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IdfMode::Unary => write!(f, "unary"),
            IdfMode::Smoothed => write!(f, "smoothed"),
        }
    }
}
