pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod search;
