use std::collections::{BTreeSet, HashSet};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::core::types::Document;
use crate::query::ast::{BooleanQuery, Conjunction};
use crate::query::parser::QueryParser;
use crate::simd::operation::VectorOps;

/// Evaluates DNF boolean queries against a corpus snapshot.
///
/// Document sets are sorted vectors of corpus ordinals so AND and OR reduce
/// to merge-intersection and merge-union. Names are only materialized at the
/// end.
pub struct BooleanMatcher<'a> {
    documents: &'a [Document],
    term_sets: Vec<HashSet<&'a str>>,
}

impl<'a> BooleanMatcher<'a> {
    pub fn new(documents: &'a [Document]) -> Self {
        let term_sets = documents
            .iter()
            .map(|doc| WhitespaceTokenizer::terms(&doc.content).collect())
            .collect();

        BooleanMatcher {
            documents,
            term_sets,
        }
    }

    /// Union over AND-groups of the intersection over each group's literals.
    pub fn evaluate(&self, query: &BooleanQuery) -> BTreeSet<String> {
        let mut matched: Vec<u32> = Vec::new();

        for conjunction in &query.conjunctions {
            let docs = self.evaluate_conjunction(conjunction);
            matched = VectorOps::union_sorted(&matched, &docs);
        }

        matched
            .into_iter()
            .map(|ordinal| self.documents[ordinal as usize].name.clone())
            .collect()
    }

    /// Intersect literal sets left to right. A group with no literals
    /// contributes nothing.
    pub fn evaluate_conjunction(&self, conjunction: &Conjunction) -> Vec<u32> {
        let mut literals = conjunction.literals.iter();

        let Some(first) = literals.next() else {
            return Vec::new();
        };

        let mut result = self.docs_for_term(&first.term, first.negated);
        for literal in literals {
            if result.is_empty() {
                break;
            }
            let docs = self.docs_for_term(&literal.term, literal.negated);
            result = VectorOps::intersect_sorted(&result, &docs);
        }

        result
    }

    /// Ordinals of documents that contain `term`, or that lack it when
    /// `negated`. Documents with no terms at all match every negation.
    pub fn docs_for_term(&self, term: &str, negated: bool) -> Vec<u32> {
        self.term_sets
            .iter()
            .enumerate()
            .filter(|(_, terms)| terms.contains(term) != negated)
            .map(|(ordinal, _)| ordinal as u32)
            .collect()
    }
}

/// Parse `query` and return the names of matching documents.
pub fn evaluate_boolean(query: &str, documents: &[Document]) -> BTreeSet<String> {
    let parsed = QueryParser::new().parse(query);
    BooleanMatcher::new(documents).evaluate(&parsed)
}
