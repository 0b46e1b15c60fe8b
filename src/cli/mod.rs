//! CLI module - argument parsing, interactive prompts, and scene rendering

mod args;
pub mod prompts;
pub mod story;
pub mod views;

pub use args::*;
pub use story::run_story;
