pub mod classifier;
pub mod handlers;
pub mod signals;
pub mod strategy;
pub mod vocabulary;
