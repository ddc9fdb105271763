use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Text analysis pipeline
pub struct Analyzer {
    tokenizer: Box<dyn Tokenizer>,
    filters: Vec<Box<dyn TokenFilter>>,
}

impl Analyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Tokenize, then run every filter in order.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let mut terms = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            terms = filter.filter(terms);
        }

        terms
    }

    /// Whitespace split followed by case folding. Used for query strings,
    /// which arrive in whatever case the client typed.
    pub fn standard() -> Self {
        Analyzer::new(Box::new(WhitespaceTokenizer))
            .add_filter(Box::new(LowercaseFilter))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::standard()
    }
}
