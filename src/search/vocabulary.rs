use std::collections::BTreeSet;
use crate::scoring::scorer::TermCounts;

/// Ordered term list giving every vector of one ranking call the same
/// coordinates. Built fresh per call; never shared between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary<'a> {
    terms: Vec<&'a str>,
}

impl<'a> Vocabulary<'a> {
    /// Distinct terms of every document plus the query terms, sorted.
    pub fn build(documents: &[TermCounts<'a>], query_terms: &[&'a str]) -> Self {
        let mut distinct: BTreeSet<&'a str> = BTreeSet::new();

        for counts in documents {
            distinct.extend(counts.distinct_terms());
        }
        distinct.extend(query_terms.iter().copied());

        Vocabulary {
            terms: distinct.into_iter().collect(),
        }
    }

    pub fn terms(&self) -> &[&'a str] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// tf(term) * weight for each coordinate. `weights` is indexed like
    /// `terms()`.
    pub fn vectorize(&self, counts: &TermCounts<'_>, weights: &[f64]) -> Vec<f64> {
        self.terms
            .iter()
            .zip(weights)
            .map(|(term, weight)| counts.term_frequency(term) * weight)
            .collect()
    }
}
