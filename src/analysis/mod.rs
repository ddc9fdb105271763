pub mod tokenizer;
pub mod filter;
pub mod filters;
pub mod analyzer;
