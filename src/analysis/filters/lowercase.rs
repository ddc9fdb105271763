use crate::analysis::filter::TokenFilter;

pub struct LowercaseFilter;

impl TokenFilter for LowercaseFilter {
    fn filter(&self, terms: Vec<String>) -> Vec<String> {
        terms.into_iter()
            .map(|term| term.to_lowercase())
            .collect()
    }
}
