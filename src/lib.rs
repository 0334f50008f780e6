pub mod cli;
pub mod config;
pub mod engine;
pub mod llm;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use engine::workflow::launch;
