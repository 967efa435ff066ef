pub mod config;
pub mod error;
pub mod prompt;
pub mod searcher;
