pub mod results;
pub mod vocabulary;
pub mod ranking;
pub mod executor;
