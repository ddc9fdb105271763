pub mod types;
pub mod corpus;
pub mod config;
pub mod error;
pub mod stats;
