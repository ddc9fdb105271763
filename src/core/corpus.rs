use std::sync::LazyLock;
use parking_lot::{Mutex, MutexGuard};
use regex::Regex;
use tracing::{debug, info};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::core::stats::CorpusStats;
use crate::core::types::{Document, Upload, UploadReport};

// a-z, 0-9 and ASCII whitespace only
static CONTENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9\t\n\x0C\r ]+$").expect("content pattern is a valid regex")
});

/// Everything guarded by the store lock.
#[derive(Debug, Default)]
pub struct CorpusState {
    documents: Vec<Document>,
    terms: Vec<String>,
    version: u64,
}

impl CorpusState {
    /// Documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Recognized-terms list set through `update_terms`.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Bumped on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn contains(&self, name: &str) -> bool {
        self.documents.iter().any(|doc| doc.name == name)
    }
}

/// In-memory document corpus behind one exclusive lock.
///
/// Reads and writes share the same mutex; a search holds the guard from
/// `lock()` for the whole engine call so it never sees a half-applied upload
/// or clear.
#[derive(Debug, Default)]
pub struct DocumentStore {
    state: Mutex<CorpusState>,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, CorpusState> {
        self.state.lock()
    }

    /// Validate and append a batch of uploads.
    ///
    /// Each file must be readable UTF-8. It is lower-cased, then rejected if
    /// it is blank or contains anything outside `[a-z0-9]` and whitespace. A
    /// name that is already stored is dropped without an error message.
    /// Errors are reported in upload order.
    pub fn add_documents(&self, uploads: Vec<Upload>) -> UploadReport {
        let mut state = self.state.lock();
        let mut errors = Vec::new();
        let mut accepted = 0;

        for upload in uploads {
            let Some(content) = upload.bytes.and_then(|bytes| String::from_utf8(bytes).ok()) else {
                errors.push(format!("Error reading {}", upload.name));
                continue;
            };
            let content = content.to_lowercase();

            if content.trim().is_empty() {
                errors.push(format!("File '{}' is empty", upload.name));
                continue;
            }

            if !CONTENT_PATTERN.is_match(&content) {
                errors.push(format!("File '{}' ignored: invalid characters.", upload.name));
                continue;
            }

            if state.contains(&upload.name) {
                debug!("Skipping duplicate document '{}'", upload.name);
                continue;
            }

            state.documents.push(Document::new(upload.name, content));
            accepted += 1;
        }

        if accepted > 0 {
            state.version += 1;
        }

        info!(
            "Upload processed: {} accepted, {} rejected, {} stored",
            accepted,
            errors.len(),
            state.documents.len()
        );

        UploadReport {
            documents: state.documents.iter().map(|doc| doc.name.clone()).collect(),
            errors,
        }
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.documents.clear();
        state.version += 1;
        info!("Corpus cleared");
    }

    /// Replace the recognized-terms list with the lower-cased words of `raw`.
    pub fn update_terms(&self, raw: &str) -> usize {
        let normalized = raw.to_lowercase();
        let mut state = self.state.lock();
        state.terms = WhitespaceTokenizer::terms(&normalized)
            .map(String::from)
            .collect();
        state.version += 1;
        state.terms.len()
    }

    pub fn names(&self) -> Vec<String> {
        self.state
            .lock()
            .documents
            .iter()
            .map(|doc| doc.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().is_empty()
    }

    pub fn stats(&self) -> CorpusStats {
        let state = self.state.lock();
        CorpusStats::collect(&state.documents, state.terms.len(), state.version)
    }
}
