//! gost - A command-line client for managing gists

pub mod commands;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod gist;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use desktop::{Desktop, SystemDesktop};
pub use gist::GistClient;
