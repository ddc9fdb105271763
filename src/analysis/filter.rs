pub trait TokenFilter: Send + Sync {
    fn filter(&self, terms: Vec<String>) -> Vec<String>;
}
