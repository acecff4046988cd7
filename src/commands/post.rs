//! Post command implementation

use super::{Command, CommandContext, validators};
use crate::gist::{GistFile, GistRequest};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::io::Read;
use std::path::Path;

/// Post command for creating a single-file gist
pub struct PostCommand {
    pub file: GistFile,
    pub description: String,
    pub public: bool,
    pub open_browser: bool,
}

/// Read a file to upload
///
/// `-` reads from stdin and requires `name`. Otherwise the name defaults to
/// the file name of `path`.
pub fn read_gist_file(path: &str, name: Option<String>) -> Result<GistFile> {
    validators::validate_file_source(path, &name)?;

    let content = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read content from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };

    let name = match name {
        Some(name) => name,
        None => Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("Cannot determine a file name for '{}'", path))?,
    };
    validators::validate_file_name(&name)?;

    Ok(GistFile::new(name, content))
}

#[async_trait]
impl Command for PostCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let request = GistRequest::create(self.file.clone(), self.description.clone(), self.public);
        let gist = context.client.create_gist(&request).await?;

        context.copy_permalink(&gist.html_url);

        if self.open_browser {
            context.open_permalink(&gist.html_url);
        }

        println!("{}", gist.html_url);
        Ok(())
    }
}
