use serde::{Serialize, Deserialize};
use crate::analysis::tokenizer::WhitespaceTokenizer;

/// Uploaded document. `content` is lower-cased before it enters the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        WhitespaceTokenizer::terms(&self.content)
    }
}

/// Raw file handed over by the upload layer, not yet validated.
/// `bytes` is `None` when the file body could not be read.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Option<Vec<u8>>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Upload {
            name: name.into(),
            bytes: Some(bytes.into()),
        }
    }

    pub fn unreadable(name: impl Into<String>) -> Self {
        Upload {
            name: name.into(),
            bytes: None,
        }
    }
}

/// Outcome of an upload batch: every stored name plus per-file rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReport {
    pub documents: Vec<String>,
    pub errors: Vec<String>,
}
