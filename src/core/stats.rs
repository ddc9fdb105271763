use std::collections::HashSet;
use serde::{Serialize, Deserialize};
use crate::core::types::Document;

/// Corpus statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub documents: usize,
    pub total_terms: usize,
    pub vocabulary_size: usize,
    pub recognized_terms: usize,
    pub version: u64,
}

impl CorpusStats {
    pub fn collect(documents: &[Document], recognized_terms: usize, version: u64) -> Self {
        let mut vocabulary = HashSet::new();
        let mut total_terms = 0;

        for doc in documents {
            for term in doc.terms() {
                total_terms += 1;
                vocabulary.insert(term);
            }
        }

        CorpusStats {
            documents: documents.len(),
            total_terms,
            vocabulary_size: vocabulary.len(),
            recognized_terms,
            version,
        }
    }
}
