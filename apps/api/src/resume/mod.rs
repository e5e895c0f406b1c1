pub mod analyzer;
pub mod document;
pub mod extract;
pub mod handlers;
pub mod scoring;
pub mod vocabulary;
