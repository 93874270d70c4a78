// Profile Analyzer
// Implements: link classification, prompt building, reply parsing, scoring, persistence.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod classifier;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod scoring;
pub mod store;
