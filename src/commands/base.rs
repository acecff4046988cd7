//! Base types and traits for the command pattern

use crate::desktop::Desktop;
use crate::gist::GistClient;
use anyhow::Result;
use colored::*;
use std::sync::Arc;

/// Context passed to all commands: the API client and desktop integration
///
/// Both are built once by the caller and shared by every command, so tests
/// can substitute a mock server and a recording desktop.
#[derive(Clone)]
pub struct CommandContext {
    pub client: GistClient,
    pub desktop: Arc<dyn Desktop>,
}

impl CommandContext {
    pub fn new(client: GistClient, desktop: Arc<dyn Desktop>) -> Self {
        Self { client, desktop }
    }

    /// Copy a permalink to the clipboard, warning instead of failing
    pub fn copy_permalink(&self, url: &str) {
        if let Err(e) = self.desktop.copy_to_clipboard(url) {
            eprintln!("{}", format!("Warning: {e}").yellow());
        }
    }

    /// Open a permalink in the browser, warning instead of failing
    pub fn open_permalink(&self, url: &str) {
        if let Err(e) = self.desktop.open_in_browser(url) {
            eprintln!("{}", format!("Warning: {e}").yellow());
        }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
