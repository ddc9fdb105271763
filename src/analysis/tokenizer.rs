pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on runs of whitespace (newlines included). Punctuation stays
/// inside the term it is attached to.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Borrowed terms in order. The engines use this directly to avoid an
    /// allocation per term.
    pub fn terms(text: &str) -> impl Iterator<Item = &str> {
        text.split_whitespace()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        Self::terms(text).map(String::from).collect()
    }
}
