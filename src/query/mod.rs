pub mod ast;
pub mod parser;
pub mod matcher;
pub mod cache;

#[cfg(test)]
mod tests;
